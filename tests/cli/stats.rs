use anyhow::Result;

use crate::{CliTest, stdout_of};

#[test]
fn test_stats_output() -> Result<()> {
    let test = CliTest::new()?;
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
        <translation type="unfinished"/>
    </message>
    <message>
        <source>Old text</source>
        <translation type="obsolete">Alter Text</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.stats_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("translations/app_de.ts (de_DE)"));
    assert!(stdout.contains("3 message(s) in 1 context(s)"));
    assert!(stdout.contains("1 finished, 1 unfinished, 1 obsolete"));
    assert!(stdout.contains("(50% complete)"));
    Ok(())
}

#[test]
fn test_stats_totals_across_catalogs() -> Result<()> {
    let test = CliTest::new()?;
    let catalog = |translation: &str| {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Service:</source>
        <translation>{}</translation>
    </message>
</context>
</TS>
"#,
            translation
        )
    };
    test.write_file("translations/app_de.ts", &catalog("Dienst:"))?;
    test.write_file("translations/app_fr.ts", &catalog("Service :"))?;

    let output = test.stats_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("translations/app_de.ts"));
    assert!(stdout.contains("translations/app_fr.ts"));
    assert!(stdout.contains("Total: 2 of 2 active message(s) finished (100%)"));
    Ok(())
}

#[test]
fn test_stats_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.stats_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("No catalog files found."));
    Ok(())
}
