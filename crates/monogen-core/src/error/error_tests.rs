#![allow(non_snake_case)]

use super::*;
use std::error::Error;

#[test]
fn GenerateError___unknown_alias___displays_alias() {
    let err = GenerateError::UnknownAlias("a".into());

    assert_eq!(err.to_string(), "unknown alias 'a'");
}

#[test]
fn GenerateError___template_syntax___displays_template_and_line() {
    let err = GenerateError::TemplateSyntax {
        template: "out.rs".into(),
        line: 3,
        message: "unclosed '{{' directive".into(),
    };

    let display = err.to_string();

    assert!(display.contains("out.rs"));
    assert!(display.contains("line 3"));
}

#[test]
fn GenerateError___template_execution___chains_underlying_error() {
    let err = GenerateError::TemplateExecution {
        template: "out.rs".into(),
        line: 7,
        source: Box::new(GenerateError::UnknownAlias("b".into())),
    };

    let source = err.source().map(ToString::to_string);

    assert_eq!(source.as_deref(), Some("unknown alias 'b'"));
    assert!(err.to_string().contains("unknown alias 'b'"));
}

#[test]
fn GenerateError___format___is_degraded_output() {
    let err = GenerateError::Format {
        template: "out.rs".into(),
        message: "expected `;`".into(),
    };

    assert!(err.is_degraded_output());
}

#[test]
fn GenerateError___fatal_kinds___are_not_degraded_output() {
    let fatal = [
        GenerateError::MissingPackageName,
        GenerateError::UnknownAlias("a".into()),
        GenerateError::InvalidBinding("a".into()),
        GenerateError::TemplateSyntax {
            template: "out.rs".into(),
            line: 1,
            message: "m".into(),
        },
    ];

    for err in fatal {
        assert!(!err.is_degraded_output(), "{err} must not be degraded");
    }
}

#[test]
fn GenerateError___source_read___displays_path() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err = GenerateError::SourceRead {
        path: PathBuf::from("templates/missing.trs"),
        source: io_err,
    };

    let display = err.to_string();

    assert!(display.contains("templates/missing.trs"));
    assert!(display.contains("no such file"));
}
