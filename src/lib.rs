// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod bootstrap;
pub mod constants;
pub mod defaults;
pub mod error;
pub mod kubernetes;
pub mod scheme;
pub mod types;

#[cfg(test)]
mod test_utils;
