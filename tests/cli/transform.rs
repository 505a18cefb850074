use anyhow::Result;

use crate::CliTest;

const CONFIG: &str = r#"{
  "bundleName": "x18nt",
  "template": "toI18n(\"${value}\")"
}"#;

const MAIN_JAVA: &str = r#"package com.example;

public class Main {

    private final String STRING_NAME = "名称";

    public static void main(String[] args) {
        String a = "一个字符串";
        System.out.println("你好世界!");
    }
}
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(".xi18ntrc.json", CONFIG)?;
    test.write_file("src/main/java/com/example/Main.java", MAIN_JAVA)?;
    Ok(test)
}

#[test]
fn test_dry_run_by_default() -> Result<()> {
    let test = project()?;

    let output = test.transform_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("x18nt.com.example.Main.1=名称"));
    assert!(stdout.contains("--apply"));

    // Nothing was written
    assert_eq!(test.read_file("src/main/java/com/example/Main.java")?, MAIN_JAVA);
    assert!(!test.root().join("src/main/resources/x18nt.properties").exists());

    Ok(())
}

#[test]
fn test_apply_rewrites_and_emits_bundle() -> Result<()> {
    let test = project()?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());

    let source = test.read_file("src/main/java/com/example/Main.java")?;
    assert!(source.contains("toI18n(\"x18nt.com.example.Main.1\")"));
    assert!(source.contains("toI18n(\"x18nt.com.example.Main.2\")"));
    assert!(source.contains("toI18n(\"x18nt.com.example.Main.3\")"));
    assert!(!source.contains("名称"));

    let props = test.read_file("src/main/resources/x18nt.properties")?;
    assert_eq!(
        props,
        "x18nt.com.example.Main.1=名称\nx18nt.com.example.Main.2=一个字符串\nx18nt.com.example.Main.3=你好世界!\n"
    );
    assert_eq!(props, test.read_file("src/main/resources/x18nt_zh_CN.properties")?);

    Ok(())
}

#[test]
fn test_verbose_apply_lists_entries() -> Result<()> {
    let test = project()?;

    let output = test.transform_command().args(["--apply", "-v"]).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Extracted entries:"));
    assert!(stdout.contains("x18nt.com.example.Main.1=名称"));

    // Without -v the entry listing is omitted on apply.
    let test = project()?;
    let output = test.transform_command().arg("--apply").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Extracted entries:"));

    Ok(())
}

#[test]
fn test_duplicate_values_share_a_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xi18ntrc.json", CONFIG)?;
    test.write_file(
        "src/main/java/Dup.java",
        "class Dup {\n    String a = \"相同\";\n    String b = \"相同\";\n    String c = \"不同\";\n}\n",
    )?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());

    let props = test.read_file("src/main/resources/x18nt.properties")?;
    assert_eq!(props, "x18nt.Dup.1=相同\nx18nt.Dup.2=不同\n");

    let source = test.read_file("src/main/java/Dup.java")?;
    assert_eq!(source.matches("toI18n(\"x18nt.Dup.1\")").count(), 2);

    Ok(())
}

#[test]
fn test_static_field_is_wrapped_in_supplier() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xi18ntrc.json", CONFIG)?;
    test.write_file(
        "src/main/java/S.java",
        "class S {\n    static String NAME = \"名称\";\n}\n",
    )?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());

    let source = test.read_file("src/main/java/S.java")?;
    assert!(source.contains("java.util.function.Supplier<String> NAME_SUPPLIER"));
    assert!(source.contains("() -> (toI18n(\"x18nt.S.1\"))"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning"));
    assert!(stdout.contains("static-field"));

    Ok(())
}

#[test]
fn test_static_fields_warn_mode_leaves_source_alone() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".xi18ntrc.json",
        r#"{
  "bundleName": "x18nt",
  "template": "toI18n(\"${value}\")",
  "staticFields": "warn"
}"#,
    )?;
    let src = "class S {\n    static String NAME = \"名称\";\n}\n";
    test.write_file("src/main/java/S.java", src)?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("src/main/java/S.java")?, src);
    assert!(!test.root().join("src/main/resources/x18nt.properties").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning"));

    Ok(())
}

#[test]
fn test_parse_error_exits_with_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xi18ntrc.json", CONFIG)?;
    test.write_file("src/main/java/Broken.java", "class {\n")?;

    let output = test.transform_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error"));
    assert!(stdout.contains("parse-error"));

    Ok(())
}

#[test]
fn test_non_cjk_sources_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xi18ntrc.json", CONFIG)?;
    let src = "class Plain {\n    String s = \"hello\";\n}\n";
    test.write_file("src/main/java/Plain.java", src)?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("src/main/java/Plain.java")?, src);
    assert!(!test.root().join("src/main/resources/x18nt.properties").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".xi18ntrc.json",
        r#"{
  "bundleName": "x18nt",
  "template": "toI18n(\"${value}\")",
  "ignores": ["**/generated/**"]
}"#,
    )?;
    test.write_file(
        "src/main/java/App.java",
        "class App {\n    String s = \"名称\";\n}\n",
    )?;
    let generated = "class Gen {\n    String s = \"生成\";\n}\n";
    test.write_file("src/main/java/generated/Gen.java", generated)?;

    let output = test.transform_command().arg("--apply").output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("src/main/java/generated/Gen.java")?, generated);
    let props = test.read_file("src/main/resources/x18nt.properties")?;
    assert_eq!(props, "x18nt.App.1=名称\n");

    Ok(())
}

#[test]
fn test_bundle_name_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xi18ntrc.json", CONFIG)?;
    test.write_file(
        "src/main/java/App.java",
        "class App {\n    String s = \"名称\";\n}\n",
    )?;

    let output = test
        .transform_command()
        .args(["--apply", "--bundle-name", "custom"])
        .output()?;
    assert!(output.status.success());

    let props = test.read_file("src/main/resources/custom.properties")?;
    assert_eq!(props, "custom.App.1=名称\n");

    Ok(())
}

#[test]
fn test_invalid_encoding_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".xi18ntrc.json",
        r#"{
  "bundleName": "x18nt",
  "encoding": "GBK"
}"#,
    )?;

    let output = test.transform_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("encoding"));

    Ok(())
}
