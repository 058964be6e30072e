// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Configuration loading tests

use neo_config::{ClientConfig, ConfigError, InputStrategy, NetworkType};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
network = "mainnet"
rpc_url = "http://seed1.ngd.network:10332"
poll_interval_ms = 250
"#
    )
    .unwrap();

    let config = ClientConfig::load(file.path()).unwrap();
    assert_eq!(config.network, NetworkType::MainNet);
    assert_eq!(config.poll_interval_ms, 250);
    assert_eq!(config.input_strategy, InputStrategy::Default);
}

#[test]
fn test_load_missing_file() {
    let err = ClientConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_config_serializes_to_json() {
    let config = ClientConfig::default();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["network"], "testnet");
    assert_eq!(json["input_strategy"], "default");
    assert!(json["max_poll_failures"].is_null());
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = ClientConfig::from_toml_str("network = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
