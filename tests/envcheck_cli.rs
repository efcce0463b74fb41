use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_envcheck"))
}

#[test]
fn report_prints_nine_fixed_lines() {
    let output = cli()
        .env("PATH", "/usr/bin:/bin")
        .output()
        .expect("envcheck run");

    assert!(
        output.status.success(),
        "exited with {:?}",
        output.status.code()
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9, "unexpected report: {stdout}");

    assert_eq!(lines[0], "=== Python环境检查 ===");
    for (index, label) in [
        (1, "Python版本: "),
        (2, "Python解释器路径: "),
        (3, "操作系统: "),
        (4, "当前工作目录: "),
    ] {
        let value = lines[index]
            .strip_prefix(label)
            .unwrap_or_else(|| panic!("line {index} missing label {label}: {stdout}"));
        assert!(!value.is_empty(), "line {index} has empty value: {stdout}");
    }
    let search_path = lines[5]
        .strip_prefix("Python路径列表: ")
        .expect("search path line labeled");
    assert!(
        search_path.starts_with('[') && search_path.len() > 2,
        "expected non-empty path list, got {search_path}"
    );
    assert_eq!(lines[6], "=== 环境变量检查 ===");
    assert_eq!(lines[7], "PATH环境变量: /usr/bin:/bin");
    assert_eq!(lines[8], "=== 检查完成 ===");
}

#[test]
fn missing_path_renders_placeholder() {
    let output = cli().env_remove("PATH").output().expect("envcheck run");

    assert!(
        output.status.success(),
        "exited with {:?}",
        output.status.code()
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9, "unexpected report: {stdout}");
    assert_eq!(lines[7], "PATH环境变量: 未找到");
    assert_eq!(lines[8], "=== 检查完成 ===");
}

#[test]
fn version_flag_short_circuits_report() {
    let output = cli().arg("--version").output().expect("envcheck run");

    assert!(
        output.status.success(),
        "exited with {:?}",
        output.status.code()
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    assert!(stdout.starts_with("envcheck "), "got {stdout}");
    assert!(!stdout.contains("检查完成"));
}
