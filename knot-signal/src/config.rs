//  Copyright 2024 knot Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

use serde::{Deserialize, Serialize};

/// Configuration of a [`Signal`](crate::Signal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Name of the signal, attached to its log events.
    pub name: String,
    /// Count of connections to reserve room for.
    pub connection_capacity: usize,
    /// Count of in-flight emission steps to reserve room for.
    ///
    /// Every nested emission parks one walker, so this bounds the nesting depth that emits without allocating.
    pub walker_capacity: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            name: "signal".to_string(),
            connection_capacity: 0,
            walker_capacity: 0,
        }
    }
}

impl SignalConfig {
    /// Create a default configuration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the count of connections to reserve room for.
    pub fn with_connection_capacity(mut self, capacity: usize) -> Self {
        self.connection_capacity = capacity;
        self
    }

    /// Set the count of in-flight emission steps to reserve room for.
    pub fn with_walker_capacity(mut self, capacity: usize) -> Self {
        self.walker_capacity = capacity;
        self
    }
}
