use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_consistent_project() -> Result<()> {
    let test = CliTest::with_files(&[
        ("util/event.h", "EVENT_H(evt_ready)\n"),
        (
            "util/event.c",
            r#"EVENT_C(evt_ready)

void init(struct plugin_t* plugin)
{
    evt_ready = event_create(plugin, "ready");
    EVENT_FIRE0(evt_ready);
}
"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 source files, 1 event - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_declaration_and_uncreated_event() -> Result<()> {
    let test = CliTest::with_files(&[
        ("plugins/foo/CMakeLists.txt", "project(foo)\n"),
        (
            "plugins/foo/src/foo.c",
            r#"EVENT_C(evt_jump)
void foo_init(struct plugin_t* plugin)
{
    evt_jump = event_create(plugin, "jump");
    EVENT_FIRE0(evt_quit);
}
"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    warning: "evt_jump"  missing-declaration
      --> plugins/foo/src/foo.c
      = note: event is created here but never declared

    error: "evt_quit"  uncreated-event
      --> plugins/foo/src/foo.c:5
      = note: event is fired but never created

    ✘ 2 problems (1 error, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_comments_and_macros_are_ignored() -> Result<()> {
    let test = CliTest::with_files(&[(
        "util/doc.c",
        r#"/*
 * EVENT_FIRE0(evt_doc);
 */
#define FIRE_ALL \
    EVENT_FIRE0(evt_macro)
"#,
    )])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file, 0 events - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fire_with_marker_like_argument() -> Result<()> {
    let test = CliTest::with_files(&[(
        "util/input.c",
        "void on_key(void)\n{\n    EVENT_FIRE1(evt_key, EVENT_CODE_ESCAPE);\n}\n",
    )])?;

    assert_cmd_snapshot!(test.check_command().arg("uncreated"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "evt_key"  uncreated-event
      --> util/input.c:3
      = note: event is fired but never created

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_arity_rule_only() -> Result<()> {
    let test = CliTest::with_files(&[
        ("util/log.h", "EVENT_H1(evt_log, const char*)\n"),
        (
            "util/log.c",
            r#"EVENT_C(evt_log)
void f(void)
{
    evt_log = event_create(plugin, "log");
    EVENT_FIRE1(evt_log, msg);
    EVENT_FIRE(evt_log);
}
"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command().arg("arity"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "evt_log"  arity-mismatch
      --> util/log.c:6
      = note: passes 0 argument(s), expected 1 (declared in util/log.h)

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_excluded_paths_are_not_scanned() -> Result<()> {
    let test = CliTest::with_files(&[
        ("plugins/core/yaml/ext/vendor.c", "EVENT_FIRE0(evt_vendor);\n"),
        ("util/gen/generated.c", "EVENT_FIRE0(evt_generated);\n"),
    ])?;

    assert_cmd_snapshot!(test.check_command().args(["--exclude", "util/gen"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 0 source files, 0 events - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_roots_and_markers() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".eventlintrc.json",
            r#"{ "roots": ["src"], "markers": { "fire": "SIGNAL_EMIT" } }"#,
        ),
        ("src/main.c", "SIGNAL_EMIT0(sig_boot);\n"),
        ("util/ignored.c", "EVENT_FIRE0(evt_ignored);\n"),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "sig_boot"  uncreated-event
      --> src/main.c:1
      = note: event is fired but never created

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_files(&[(".eventlintrc.json", r#"{ "excludes": ["[ext*"] }"#)])?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern in 'excludes': "[ext*": Pattern syntax error near position 0: invalid range pattern
    "#);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for checking event declaration/definition/fire consistency in C plugin trees

    Usage: eventlint [COMMAND]

    Commands:
      check  Check events for missing declarations, definitions, creations and arity mismatches
      list   List every event as `identifier: declaration,definition,global_name`
      init   Initialize a new .eventlintrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
