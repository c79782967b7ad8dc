// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for annotation points and exported reports.

pub mod point;
pub mod report;
