// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Throwaway state directory for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// A state directory inside a temporary root, removed with the root on drop.
#[derive(Debug)]
pub struct TempState {
    _root: TempDir,
    pub state_dir: PathBuf,
}

/// Creates an empty state directory for one test.
pub async fn setup_temp_state() -> Result<TempState, Box<dyn std::error::Error>> {
    let root = tempfile::Builder::new().prefix("vigil-test-").tempdir()?;
    let state_dir = root.path().join("state");
    tokio::fs::create_dir_all(&state_dir).await?;
    Ok(TempState {
        _root: root,
        state_dir,
    })
}
