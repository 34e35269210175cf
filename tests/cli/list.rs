use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

fn ready_project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("lightship/events.h", "EVENT_H(ready)\n"),
        ("plugins/foo/CMakeLists.txt", "project(foo)\n"),
        (
            "plugins/foo/src/foo.c",
            "EVENT_C(ready)\nevent_create(ev_ready, \"ready\", NULL);\n",
        ),
    ])
}

#[test]
fn test_list_baseline_format() -> Result<()> {
    let test = ready_project()?;
    test.write_file("util/log.h", "EVENT_H(evt_log)\n")?;

    assert_cmd_snapshot!(test.list_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    evt_log: evt_log,,
    ready: ready,ready,foo.ready

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_list_json_registry() -> Result<()> {
    let test = ready_project()?;

    assert_cmd_snapshot!(test.list_command().arg("--json"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "ready": {
        "declaration_file": "lightship/events.h",
        "definition_file": "plugins/foo/src/foo.c",
        "creation_file": "plugins/foo/src/foo.c",
        "declaration": "ready",
        "definition": "ready",
        "global_name": "foo.ready",
        "declared_arity": null,
        "fire_calls": [],
        "conflicts": []
      }
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_list_records_fire_calls() -> Result<()> {
    let test = CliTest::with_files(&[("util/x.c", "    EVENT_FIRE2(evt_move, x, y);\n")])?;

    assert_cmd_snapshot!(test.list_command().arg("--json"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "evt_move": {
        "declaration_file": null,
        "definition_file": null,
        "creation_file": null,
        "declaration": null,
        "definition": null,
        "global_name": null,
        "declared_arity": null,
        "fire_calls": [
          {
            "file": "util/x.c",
            "line": 1,
            "arity": 2,
            "args": [
              "x",
              "y"
            ]
          }
        ],
        "conflicts": []
      }
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_list_source_root_flag() -> Result<()> {
    let test = ready_project()?;
    let outside = CliTest::new()?;

    assert_cmd_snapshot!(outside.list_command().arg("--source-root").arg(test.root()), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ready: ready,ready,foo.ready

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_list_checkout_under_plugins_directory() -> Result<()> {
    let outside = CliTest::new()?;
    outside.write_file("plugins/lightship/.git/HEAD", "ref: refs/heads/main\n")?;
    outside.write_file("plugins/lightship/lightship/CMakeLists.txt", "project(lightship)\n")?;
    outside.write_file(
        "plugins/lightship/lightship/core/x.c",
        "evt_boot = event_create(plugin, \"boot\");\n",
    )?;

    assert_cmd_snapshot!(
        outside
            .list_command()
            .arg("--source-root")
            .arg(outside.root().join("plugins/lightship")),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    evt_boot: ,,builtin.boot

    ----- stderr -----
    "
    );

    Ok(())
}
