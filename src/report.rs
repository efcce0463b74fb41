//! Fixed-format environment report.
//!
//! The nine output lines, their order, and the banner/label/placeholder
//! bytes are a frozen contract; only the values after each label vary.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::{build_info, probe};

/// Opening banner of the report.
const REPORT_BANNER: &str = "=== Python环境检查 ===";
/// Banner introducing the environment-variable section.
const ENV_SECTION_BANNER: &str = "=== 环境变量检查 ===";
/// Closing banner.
const DONE_BANNER: &str = "=== 检查完成 ===";
/// Placeholder rendered when `PATH` is not set.
const PATH_MISSING: &str = "未找到";

/// One-shot snapshot of the process's runtime and environment state.
#[derive(Debug, Serialize)]
pub struct EnvReport {
    pub runtime_version: String,
    pub executable: PathBuf,
    pub os_name: String,
    pub working_dir: PathBuf,
    pub search_path: Vec<PathBuf>,
    pub path_var: Option<String>,
}

impl EnvReport {
    /// Capture all six introspection values from the live process.
    pub fn capture() -> Result<Self> {
        Ok(Self {
            runtime_version: build_info::RUNTIME_VERSION.to_string(),
            executable: probe::executable_path()?,
            os_name: probe::os_name().to_string(),
            working_dir: probe::working_dir()?,
            search_path: probe::library_search_path(),
            path_var: probe::path_var(),
        })
    }

    /// Render the report as its nine fixed lines.
    pub fn render(&self) -> Vec<String> {
        vec![
            REPORT_BANNER.to_string(),
            format!("Python版本: {}", self.runtime_version),
            format!("Python解释器路径: {}", self.executable.display()),
            format!("操作系统: {}", self.os_name),
            format!("当前工作目录: {}", self.working_dir.display()),
            format!("Python路径列表: {:?}", self.search_path),
            ENV_SECTION_BANNER.to_string(),
            format!(
                "PATH环境变量: {}",
                self.path_var.as_deref().unwrap_or(PATH_MISSING)
            ),
            DONE_BANNER.to_string(),
        ]
    }

    /// Print the rendered report to stdout.
    pub fn print(&self) {
        for line in self.render() {
            println!("{line}");
        }
    }
}
