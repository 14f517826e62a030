// ABOUTME: Shared server resources threaded through route handlers
// ABOUTME: Biomarker store handle plus server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Shared server resources

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database::BiomarkerStore;

/// Dependencies shared by all route handlers
pub struct ServerResources {
    /// Biomarker persistence backend
    pub store: Arc<dyn BiomarkerStore>,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle a store and configuration for route construction
    #[must_use]
    pub fn new(store: Arc<dyn BiomarkerStore>, config: ServerConfig) -> Self {
        Self { store, config }
    }
}
