//! Dispatcher integration tests.
//!
//! Exercise the public API end to end with an in-memory sink.

use std::sync::{Arc, Mutex};

use anyhow::bail;
use cmdrun::commands::help::{HELP_HEADER, NONE_AVAILABLE};
use cmdrun::logger::MemorySink;
use cmdrun::{handler, CmdrunError, CommandDef, CommandRegistry, Dispatched, Dispatcher, Logger};
use pretty_assertions::assert_eq;

fn dispatcher_with(registry: CommandRegistry) -> (Dispatcher, MemorySink) {
    let sink = MemorySink::new();
    let logger = Arc::new(Logger::new(sink.clone()));
    (Dispatcher::with_registry(registry, logger), sink)
}

#[test]
fn test_empty_and_help_render_listing() {
    let invoked = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&invoked);
    let mut registry = CommandRegistry::new();
    registry
        .command("build", "Build the project", move |_| {
            *flag.lock().unwrap() = true;
            Ok(())
        })
        .unwrap();
    let (dispatcher, sink) = dispatcher_with(registry);

    let none: Vec<String> = Vec::new();
    assert!(!dispatcher.run(&none));
    assert!(!dispatcher.run(&["help", "build"]));

    assert!(!*invoked.lock().unwrap());
    assert_eq!(
        sink.lines(),
        vec![
            HELP_HEADER,
            "build - Build the project",
            HELP_HEADER,
            "build - Build the project",
        ]
    );
}

#[test]
fn test_unknown_command_reports_name() {
    let (dispatcher, sink) = dispatcher_with(CommandRegistry::new());

    assert!(!dispatcher.run(&["unknown-cmd"]));
    let output = sink.contents();
    assert!(output.contains("unknown-cmd"));
    assert!(output.starts_with("[ERROR]: "));
    assert!(!output.contains(NONE_AVAILABLE));
}

#[test]
fn test_failing_handler_does_not_escape() {
    let mut registry = CommandRegistry::new();
    registry
        .command("build", "", |_| bail!("disk full"))
        .unwrap();
    let (dispatcher, sink) = dispatcher_with(registry);

    assert_eq!(
        dispatcher.dispatch(&["build", "x"]),
        Err(CmdrunError::handler_failed("disk full"))
    );
    assert!(!dispatcher.run(&["build", "x"]));
    assert!(sink.contents().contains("disk full"));
}

#[test]
fn test_successful_handler_sees_remaining_args() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = Arc::clone(&seen);
    let mut registry = CommandRegistry::new();
    registry
        .command("build", "", move |args| {
            *record.lock().unwrap() = args.to_vec();
            Ok(())
        })
        .unwrap();
    let (dispatcher, sink) = dispatcher_with(registry);

    assert_eq!(
        dispatcher.dispatch(&["build", "a", "b"]),
        Ok(Dispatched::Completed)
    );
    assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    assert_eq!(sink.contents(), "");
}

#[test]
fn test_first_registration_wins() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();

    let first = Arc::clone(&calls);
    registry
        .register(
            CommandDef::new("deploy", "h1"),
            handler(move |_| {
                first.lock().unwrap().push(1);
                Ok(())
            }),
        )
        .unwrap();
    let second = Arc::clone(&calls);
    registry
        .register(
            CommandDef::new("deploy", "h2"),
            handler(move |_| {
                second.lock().unwrap().push(2);
                Ok(())
            }),
        )
        .unwrap();

    let (dispatcher, sink) = dispatcher_with(registry);
    assert!(dispatcher.run(&["deploy"]));
    assert_eq!(*calls.lock().unwrap(), vec![1]);

    dispatcher.render_help();
    assert_eq!(sink.lines(), vec![HELP_HEADER, "deploy - h1"]);
}

#[test]
fn test_help_lists_in_registration_order() {
    let mut registry = CommandRegistry::new();
    for name in ["zip", "apply", "merge"] {
        registry.command(name, format!("{name} things"), |_| Ok(())).unwrap();
    }
    let (dispatcher, sink) = dispatcher_with(registry);

    dispatcher.render_help();
    assert_eq!(
        sink.lines(),
        vec![
            HELP_HEADER,
            "zip - zip things",
            "apply - apply things",
            "merge - merge things",
        ]
    );
    assert!(sink.is_default_colors());
}

#[test]
fn test_empty_registry_help() {
    let (dispatcher, sink) = dispatcher_with(CommandRegistry::new());
    assert_eq!(dispatcher.dispatch(&["help"]), Ok(Dispatched::Help));
    assert_eq!(sink.lines(), vec![HELP_HEADER, NONE_AVAILABLE]);
}

#[test]
fn test_clear_then_reregister() {
    let mut registry = CommandRegistry::new();
    registry.command("old", "", |_| Ok(())).unwrap();
    let (dispatcher, _) = dispatcher_with(registry);

    dispatcher.clear();
    assert!(!dispatcher.run(&["old"]));

    dispatcher
        .register(CommandDef::named("new"), handler(|_| Ok(())))
        .unwrap();
    assert!(dispatcher.run(&["new"]));
}
