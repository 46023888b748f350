use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, FILTERS, laravel_project, run};

#[test]
fn test_render_switch_over_all_locales() -> Result<()> {
    let test = laravel_project()?;

    assert_cmd_snapshot!(test.render_command("('translations', 'messages')"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    <script>window["translations"] = (function (locale) { switch (locale) { case "fr": return {"hello":"Bonjour","bye":"Au revoir"}; default: return {"hello":"Hi"}; } })(document.documentElement.lang);</script>

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_render_regional_locale_and_hidden_files() -> Result<()> {
    let test = laravel_project()?;
    test.write_file("lang/pt_BR.json", r#"{"hello": "Olá"}"#)?;
    test.write_file("lang/.eslintrc.json", r#"{"root": true}"#)?;
    test.write_file("lang/.cache/messages.json", r#"{"hello": "Cached"}"#)?;

    assert_cmd_snapshot!(test.render_command("('translations', 'messages')"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    <script>window["translations"] = (function (locale) { switch (locale) { case "fr": return {"hello":"Bonjour","bye":"Au revoir"}; case "pt_BR": case "pt-BR": return {"hello":"Olá"}; default: return {"hello":"Hi"}; } })(document.documentElement.lang);</script>

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_render_single_locale_falls_back() -> Result<()> {
    let test = laravel_project()?;

    let mut cmd = test.render_command("('i18n', 'messages')");
    cmd.args(["--locale", "de"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    <script>window["i18n"] = {"hello":"Hi"};</script>

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_render_default_window_key_from_config() -> Result<()> {
    let test = laravel_project()?;
    test.write_file(".lingorc.json", r#"{ "windowKey": "lang" }"#)?;

    let mut cmd = test.render_command("(null, messages)");
    cmd.args(["--locale", "en"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with(r#"<script>window["lang"] = "#));

    Ok(())
}

#[test]
fn test_render_without_lang_dir() -> Result<()> {
    let test = CliTest::with_file("resources/views/app.blade.php", "@translations")?;

    assert_cmd_snapshot!(test.render_command("('translations', 'messages')"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    <script>window["translations"] = (function (locale) { switch (locale) { default: return {}; } })(document.documentElement.lang);</script>

    ----- stderr -----
    warning: No lang directory found (tried: lang, resources/lang, vendor/laravel/framework/src/Illuminate/Translation/lang), translations will be empty
    "#);

    Ok(())
}

#[test]
fn test_render_resources_lang_dir() -> Result<()> {
    let test = CliTest::with_file("resources/lang/en.json", r#"{"hello": "Hi"}"#)?;

    let mut cmd = test.render_command("('translations')");
    cmd.args(["--locale", "en", "-v"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    <script>window["translations"] = {"hello":"Hi"};</script>

    ----- stderr -----
    note: No .lingorc.json found, using default configuration
    note: Using lang directory ./resources/lang
    note: No resources requested, only JSON translations are rendered
    "#);

    Ok(())
}

#[test]
fn test_render_invalid_directive() -> Result<()> {
    let test = laravel_project()?;

    assert_cmd_snapshot!(test.render_command("('translations', system('id'))"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Invalid directive expression: ('translations', system('id')): Unbalanced parentheses
    ");

    Ok(())
}

#[test]
fn test_render_malformed_json_fails() -> Result<()> {
    let test = laravel_project()?;
    test.write_file("lang/de.json", r#"{"hello": "Hallo""#)?;

    let mut cmd = test.render_command("('translations', 'messages')");
    cmd.args(["--locale", "fr"]);

    insta::with_settings!({ filters => FILTERS.to_vec() }, {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        error: Malformed JSON translation file ./lang/de.json: EOF while parsing an object at line [LINE] column [COLUMN]
        ");
    });

    Ok(())
}
