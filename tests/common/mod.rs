//! Fake sysfs GPIO tree for integration tests.
//!
//! The controller writes to `export` / `unexport`; [`FakeSysfs::kernel_tick`]
//! plays the kernel's part and materializes or removes `gpio<N>/`.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use sysfs_pin::{GpioConfig, PinController};
use tempfile::{tempdir, TempDir};

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub struct FakeSysfs {
    dir: TempDir,
}

impl FakeSysfs {
    pub fn new() -> Self {
        init_tracing();
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("export"), "").expect("export file");
        fs::write(dir.path().join("unexport"), "").expect("unexport file");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> GpioConfig {
        GpioConfig::new()
            .with_root(self.root())
            .with_max_path_len(4096)
    }

    pub fn controller(&self) -> PinController {
        PinController::with_config(self.config())
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read fake file")
    }

    pub fn write(&self, rel: &str, content: &str) {
        fs::write(self.path(rel), content).expect("write fake file");
    }

    pub fn pin_dir_exists(&self, port: u32) -> bool {
        self.path(&format!("gpio{port}")).is_dir()
    }

    /// Apply pending `export` / `unexport` writes, then clear both files.
    pub fn kernel_tick(&self) {
        let exported = self.read("export");
        if let Ok(port) = exported.trim().parse::<u32>() {
            let pin_dir = self.path(&format!("gpio{port}"));
            fs::create_dir_all(&pin_dir).expect("pin dir");
            fs::write(pin_dir.join("direction"), "in").expect("direction file");
            fs::write(pin_dir.join("value"), "0\n").expect("value file");
        }

        let unexported = self.read("unexport");
        if let Ok(port) = unexported.trim().parse::<u32>() {
            fs::remove_dir_all(self.path(&format!("gpio{port}"))).expect("remove pin dir");
        }

        self.write("export", "");
        self.write("unexport", "");
    }
}
