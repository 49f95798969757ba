//! Tests for tor, chrome, webp, rand and writable.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_tor() {
    match parse(&["arkive", "tor"]) {
        CliCommand::Tor => {}
        _ => panic!("expected Tor"),
    }
}

#[test]
fn cli_parse_chrome() {
    match parse(&["arkive", "chrome"]) {
        CliCommand::Chrome => {}
        _ => panic!("expected Chrome"),
    }
}

#[test]
fn cli_parse_webp() {
    match parse(&["arkive", "webp", "in.webp", "out.png"]) {
        CliCommand::Webp { src, dst } => {
            assert_eq!(src, Path::new("in.webp"));
            assert_eq!(dst, Path::new("out.png"));
        }
        _ => panic!("expected Webp"),
    }
}

#[test]
fn cli_parse_rand() {
    match parse(&["arkive", "rand", "36"]) {
        CliCommand::Rand { length, alphabet } => {
            assert_eq!(length, 36);
            assert!(alphabet.is_empty());
        }
        _ => panic!("expected Rand"),
    }
    match parse(&["arkive", "rand", "5", "--alphabet", "lower"]) {
        CliCommand::Rand { length, alphabet } => {
            assert_eq!(length, 5);
            assert_eq!(alphabet, "lower");
        }
        _ => panic!("expected Rand with --alphabet"),
    }
}

#[test]
fn cli_parse_rand_rejects_negative() {
    assert!(Cli::try_parse_from(["arkive", "rand", "-3"]).is_err());
}

#[test]
fn cli_parse_writable() {
    match parse(&["arkive", "writable", "/tmp/out"]) {
        CliCommand::Writable { dir } => assert_eq!(dir, Path::new("/tmp/out")),
        _ => panic!("expected Writable"),
    }
}
