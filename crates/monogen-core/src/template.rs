//! Template loading, parsing, and execution.
//!
//! A template is ordinary Rust source text with `{{ ... }}` directives.
//! Exactly two functions are available inside a directive, both backed by
//! the caller's [`AliasMap`]:
//!
//! - `{{T alias}}` expands to the concrete type bound to `alias`;
//! - `{{Name alias}}` expands to the identifier derived from that type.
//!
//! The alias may be quoted (`{{T "a"}}`). Templates execute against no
//! other runtime data; every dynamic fragment comes from these two calls.
//!
//! Parsing and execution are separate phases so that malformed directive
//! syntax is reported before any alias is resolved, while an unbound alias
//! only surfaces when execution actually reaches the directive.

use std::fs;
use std::path::Path;

use crate::alias::AliasMap;
use crate::config::BuildContext;
use crate::error::{GenerateError, GenerateResult};

const OPEN_DELIM: &str = "{{";
const CLOSE_DELIM: &str = "}}";

/// Read a template file and prepend the generated-file header.
///
/// The path is resolved against the context's source root (absolute paths
/// pass through unchanged). The header is an inner doc comment naming the
/// owning crate; it is built from the context's package name, whose
/// absence is a fatal precondition.
pub fn load_template_source(ctx: &BuildContext, source: &Path) -> GenerateResult<String> {
    if ctx.package_name.is_empty() {
        return Err(GenerateError::MissingPackageName);
    }

    let path = ctx.source_root.join(source);
    let body = fs::read_to_string(&path).map_err(|e| GenerateError::SourceRead {
        path: path.clone(),
        source: e,
    })?;

    Ok(format!(
        "//! Generated code for crate `{}`. DO NOT EDIT.\n{}",
        ctx.package_name, body
    ))
}

/// The two functions a directive can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateFn {
    Type,
    Name,
}

impl TemplateFn {
    fn name(self) -> &'static str {
        match self {
            TemplateFn::Type => "T",
            TemplateFn::Name => "Name",
        }
    }
}

#[derive(Debug)]
enum Segment {
    Literal(String),
    Call {
        func: TemplateFn,
        alias: String,
        line: usize,
    },
}

/// A parsed template, ready to execute.
#[derive(Debug)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Compile template text into literal and call segments.
    ///
    /// `name` identifies the template in error messages; the generator
    /// names templates after their destination file.
    pub fn parse(name: impl Into<String>, text: &str) -> GenerateResult<Self> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut line = 1usize;
        let mut rest = text;

        while let Some(start) = rest.find(OPEN_DELIM) {
            let (literal, tail) = rest.split_at(start);
            line += literal.matches('\n').count();
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal.to_owned()));
            }

            let tail = &tail[OPEN_DELIM.len()..];
            let end = tail
                .find(CLOSE_DELIM)
                .ok_or_else(|| syntax(&name, line, format!("unclosed '{OPEN_DELIM}' directive")))?;
            let body = &tail[..end];
            if body.contains(OPEN_DELIM) {
                return Err(syntax(
                    &name,
                    line,
                    format!("unexpected '{OPEN_DELIM}' inside directive"),
                ));
            }

            segments.push(parse_directive(&name, line, body)?);
            line += body.matches('\n').count();
            rest = &tail[end + CLOSE_DELIM.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }

        Ok(Self { name, segments })
    }

    /// The template's name as used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expand the template against the given aliases.
    ///
    /// A failed alias lookup aborts execution; the resulting error carries
    /// the template name and the line of the offending directive.
    pub fn execute(&self, aliases: &AliasMap) -> GenerateResult<String> {
        let mut output = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Call { func, alias, line } => {
                    let value = match func {
                        TemplateFn::Type => aliases.type_of(alias).map(str::to_owned),
                        TemplateFn::Name => aliases.identifier(alias),
                    };
                    let value = value.map_err(|e| GenerateError::TemplateExecution {
                        template: self.name.clone(),
                        line: *line,
                        source: Box::new(e),
                    })?;
                    output.push_str(&value);
                }
            }
        }

        Ok(output)
    }
}

fn parse_directive(template: &str, line: usize, body: &str) -> GenerateResult<Segment> {
    let mut tokens = body.split_whitespace();

    let func = match tokens.next() {
        Some("T") => TemplateFn::Type,
        Some("Name") => TemplateFn::Name,
        Some(other) => {
            return Err(syntax(
                template,
                line,
                format!("unknown template function '{other}'"),
            ));
        }
        None => return Err(syntax(template, line, "empty directive")),
    };

    let alias = tokens.next().ok_or_else(|| {
        syntax(
            template,
            line,
            format!("'{}' expects an alias argument", func.name()),
        )
    })?;
    if tokens.next().is_some() {
        return Err(syntax(
            template,
            line,
            format!("'{}' expects exactly one alias argument", func.name()),
        ));
    }

    let alias = unquote(alias);
    if alias.is_empty() {
        return Err(syntax(template, line, "empty alias argument"));
    }

    Ok(Segment::Call {
        func,
        alias: alias.to_owned(),
        line,
    })
}

fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

fn syntax(template: &str, line: usize, message: impl Into<String>) -> GenerateError {
    GenerateError::TemplateSyntax {
        template: template.to_owned(),
        line,
        message: message.into(),
    }
}
