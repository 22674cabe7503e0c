use anyhow::Result;

use crate::{CATALOG_DE, CliTest, DIALOG_CPP, stdout_of};

#[test]
fn test_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;

    let output = test
        .update_command()
        .args(["--catalog", "translations/app_de.ts"])
        .output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("Would create translations/app_de.ts"));
    assert!(stdout.contains("2 added"));
    assert!(stdout.contains("--apply"));
    assert!(!test.has_file("translations/app_de.ts"));
    Ok(())
}

#[test]
fn test_apply_creates_catalog_with_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;

    let output = test
        .update_command()
        .args(["--catalog", "translations/app_de.ts", "--apply"])
        .output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("Created translations/app_de.ts"));

    let content = test.read_file("translations/app_de.ts")?;
    assert!(content.contains(r#"<TS version="2.0" language="de">"#));
    assert!(content.contains("<source>Paste options</source>"));
    assert!(content.contains("<source>Service:</source>"));
    assert!(content.contains(r#"<translation type="unfinished"/>"#));
    assert!(content.contains(r#"filename="src/pastedialog.cpp""#));
    Ok(())
}

#[test]
fn test_apply_preserves_translations_and_updates_locations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    // Stale location (line 99) and one missing message
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <location filename="src/pastedialog.cpp" line="99"/>
        <source>Service:</source>
        <translation>Dienst:</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.update_command().arg("--apply").output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("Updated translations/app_de.ts"));
    assert!(stdout.contains("1 added"));
    assert!(stdout.contains("1 location update(s)"));

    let content = test.read_file("translations/app_de.ts")?;
    // Translation survived, location refreshed
    assert!(content.contains("<translation>Dienst:</translation>"));
    assert!(content.contains(r#"line="4""#));
    assert!(!content.contains(r#"line="99""#));
    // The new message arrived unfinished
    assert!(content.contains("<source>Paste options</source>"));
    assert!(content.contains(r#"<translation type="unfinished"/>"#));
    Ok(())
}

#[test]
fn test_apply_marks_vanished_obsolete() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Paste options</source>
        <translation>Einfügeoptionen</translation>
    </message>
    <message>
        <source>Service:</source>
        <translation>Dienst:</translation>
    </message>
    <message>
        <source>Removed label</source>
        <translation>Entferntes Label</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.update_command().arg("--apply").output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("1 vanished"));

    let content = test.read_file("translations/app_de.ts")?;
    assert!(content.contains(r#"<translation type="obsolete">Entferntes Label</translation>"#));
    Ok(())
}

#[test]
fn test_apply_no_obsolete_drops_vanished() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Paste options</source>
        <translation>Einfügeoptionen</translation>
    </message>
    <message>
        <source>Service:</source>
        <translation>Dienst:</translation>
    </message>
    <message>
        <source>Removed label</source>
        <translation type="obsolete">Entferntes Label</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test
        .update_command()
        .args(["--apply", "--no-obsolete"])
        .output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("1 removed"));

    let content = test.read_file("translations/app_de.ts")?;
    assert!(!content.contains("Removed label"));
    assert!(content.contains("<source>Service:</source>"));
    Ok(())
}

#[test]
fn test_up_to_date_catalog_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    test.write_file("translations/app_de.ts", CATALOG_DE)?;

    let before = test.read_file("translations/app_de.ts")?;
    let output = test.update_command().arg("--apply").output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("All catalogs are up to date"));
    assert_eq!(test.read_file("translations/app_de.ts")?, before);
    Ok(())
}

#[test]
fn test_broken_catalog_never_overwritten() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    let broken = "<TS version=\"2.0\">\n<context>";
    test.write_file("translations/app_de.ts", broken)?;

    let output = test.update_command().arg("--apply").output()?;

    // The load failure is an error; the file is left exactly as it was
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("translations/app_de.ts")?, broken);
    Ok(())
}

#[test]
fn test_update_scans_designer_forms() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/pastedialog.ui",
        r#"<ui version="4.0">
 <class>PasteDialog</class>
 <widget class="QDialog">
  <property name="windowTitle">
   <string>Paste options</string>
  </property>
 </widget>
</ui>
"#,
    )?;

    let output = test
        .update_command()
        .args(["--catalog", "app_en.ts", "--apply"])
        .output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    let content = test.read_file("app_en.ts")?;
    assert!(content.contains("<name>PasteDialog</name>"));
    assert!(content.contains("<source>Paste options</source>"));
    assert!(content.contains(r#"filename="src/pastedialog.ui" line="5""#));
    Ok(())
}
