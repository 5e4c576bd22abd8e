// Copyright 2025 Slogger Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::Level;
use slogger::Attr;
use slogger::HandlerOpts;
use slogger::Logger;
use slogger::LoggerOpts;
use slogger::Memory;

#[test]
fn test_json_output_carries_level_and_msg() {
    let sink = Memory::new();
    let logger = Logger::new(
        LoggerOpts::new("testService", "testApp")
            .json_output()
            .destination(sink.clone()),
    );

    logger.info("test");

    let data = sink.contents();
    assert!(data.starts_with('{'));
    assert!(data.trim_end().ends_with('}'));
    assert!(data.contains("\"level\":\"INFO\""));
    assert!(data.contains("\"msg\":\"test\""));
    assert!(data.contains("\"system\":{\"applicationName\":\"testApp\",\"service\":\"testService\"}"));
}

#[test]
fn test_text_output_with_source_and_debug_level() {
    let sink = Memory::new();
    let logger = Logger::with_handler(
        LoggerOpts::new("testService", "testApp").destination(sink.clone()),
        HandlerOpts::new().source().level("debug"),
    );

    logger.debug("test");

    let data = sink.contents();
    assert!(data.contains("level=DEBUG"));
    assert!(data.contains("source="));
    assert!(data.contains(file!()));
}

#[test]
fn test_debug_is_dropped_at_default_level() {
    let sink = Memory::new();
    let logger = Logger::new(LoggerOpts::new("s", "a").destination(sink.clone()));

    logger.debug("quiet");
    assert_eq!(sink.contents(), "");

    logger.info("loud");
    assert!(sink.contents().contains("msg=loud"));
}

#[test]
fn test_duplicate_key_in_one_call_keeps_last_value() {
    let sink = Memory::new();
    let logger = Logger::new(LoggerOpts::new("s", "a").destination(sink.clone()));

    logger.log(
        Level::Info,
        "dup",
        [Attr::new("k", "first"), Attr::new("k", "last")],
    );

    let data = sink.contents();
    assert!(data.contains(" k=last"));
    assert_eq!(data.matches(" k=").count(), 1);
}

#[test]
fn test_call_site_attr_overrides_bound_attr() {
    let sink = Memory::new();
    let logger = Logger::new(
        LoggerOpts::new("s", "a")
            .destination(sink.clone())
            .attr(Attr::new("env", "dev")),
    );

    logger.log(Level::Info, "deploy", [Attr::new("env", "prod")]);

    let data = sink.contents();
    assert!(data.contains(" env=prod"));
    assert_eq!(data.matches(" env=").count(), 1);
}

#[test]
fn test_sub_logger_binds_component_and_leaves_parent_alone() {
    let sink = Memory::new();
    let logger = Logger::new(LoggerOpts::new("example", "api").destination(sink.clone()));
    let child = logger.component("testComponent");

    child.info("from child");
    logger.info("from parent");

    let data = sink.contents();
    let lines: Vec<&str> = data.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("component.name=testComponent"));
    assert!(!lines[1].contains("component"));
}

#[test]
fn test_component_group_nests_in_json() {
    let sink = Memory::new();
    let logger = Logger::new(
        LoggerOpts::new("example", "api")
            .json_output()
            .destination(sink.clone()),
    );

    logger.component("worker").info("hello");

    assert!(sink.contents().contains("\"component\":{\"name\":\"worker\"}"));
}

#[test]
fn test_with_derivation_is_value_semantic() {
    let sink = Memory::new();
    let logger = Logger::new(LoggerOpts::new("s", "a").destination(sink.clone()));
    let enriched = logger.with([Attr::new("request_id", "abc123")]);

    enriched.info("handled");
    logger.info("idle");

    let data = sink.contents();
    let lines: Vec<&str> = data.lines().collect();
    assert!(lines[0].contains(" request_id=abc123"));
    assert!(!lines[1].contains("request_id"));
}

#[test]
fn test_error_attr_renders_message_or_empty() {
    let sink = Memory::new();
    let logger = Logger::new(LoggerOpts::new("s", "a").destination(sink.clone()));

    let err = std::io::Error::other("connection reset");
    logger.log(Level::Error, "request failed", [Attr::error(Some(&err))]);
    logger.log(Level::Info, "request ok", [Attr::error(None)]);

    let data = sink.contents();
    let lines: Vec<&str> = data.lines().collect();
    assert!(lines[0].contains(" error=\"connection reset\""));
    assert!(lines[1].contains(" error=\"\""));
}

#[test]
fn test_replace_attr_hook_rewrites_values() {
    let sink = Memory::new();
    let logger = Logger::with_handler(
        LoggerOpts::new("s", "a")
            .destination(sink.clone())
            .attr(Attr::new("password", "hunter2")),
        HandlerOpts::new().replace_attr(|_groups, attr| {
            if attr.key() == "password" {
                Attr::new("password", "[redacted]")
            } else {
                attr
            }
        }),
    );

    logger.info("login");

    let data = sink.contents();
    assert!(data.contains(" password=[redacted]"));
    assert!(!data.contains("hunter2"));
}

#[test]
fn test_replace_attr_hook_sees_group_path() {
    let sink = Memory::new();
    let logger = Logger::with_handler(
        LoggerOpts::new("secretService", "app").destination(sink.clone()),
        HandlerOpts::new().replace_attr(|groups, attr| {
            if groups == ["system"] && attr.key() == "service" {
                Attr::new("service", "****")
            } else {
                attr
            }
        }),
    );

    logger.info("up");

    let data = sink.contents();
    assert!(data.contains(" system.service=****"));
    assert!(!data.contains("secretService"));
}

#[test]
fn test_discard_logger_emits_nothing_and_succeeds() {
    let logger = Logger::discard();
    logger.info("hello world");
    logger.error("also silent");
}

#[test]
fn test_system_groups_merge_across_layers() {
    let sink = Memory::new();
    let logger = Logger::new(
        LoggerOpts::new("orders", "api")
            .destination(sink.clone())
            .attr(Attr::group("system", [Attr::new("zone", "eu-west")])),
    );

    logger.info("up");

    let data = sink.contents();
    assert!(data.contains(" system.service=orders"));
    assert!(data.contains(" system.zone=eu-west"));
    assert_eq!(data.matches("system.service=").count(), 1);
}

#[test]
fn test_message_with_spaces_is_quoted_in_text() {
    let sink = Memory::new();
    let logger = Logger::new(LoggerOpts::new("s", "a").destination(sink.clone()));

    logger.info("hello world");

    assert!(sink.contents().contains(" msg=\"hello world\""));
}
