// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the PINSPEC application.

pub mod canvas;
pub mod editor;
pub mod specifications;
pub mod toolbar;
pub mod viewport;
