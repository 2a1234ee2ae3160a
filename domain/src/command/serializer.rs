//! Argument serializer: settings + request → token sequence
//!
//! Pure and deterministic. Layout:
//!
//! ```text
//! [--diagnostics] <verb...> <positionals> <flags> [-- <trailing>]   (AfterPositionals)
//! [--diagnostics] <verb...> <flags> <positionals> [<trailing>]      (BeforePositionals, exec)
//! ```

use super::entities::FlagPlacement;
use super::request::CommandRequest;
use crate::arguments::{Argument, ProcessArguments};
use crate::settings::{CommandOption, CommandSettings, OptionValue};

/// Serialize a validated request and its settings into process arguments.
pub fn serialize<S: CommandSettings>(request: &CommandRequest, settings: &S) -> ProcessArguments {
    let command = request.command();
    let mut args = ProcessArguments::new();

    if settings.common().diagnostic_output {
        args.append("--diagnostics");
    }
    for verb in command.verb() {
        args.append(*verb);
    }

    let options = settings.options();
    match command.flag_placement() {
        FlagPlacement::AfterPositionals => {
            push_positionals(&mut args, request);
            append_options(&mut args, &options);
        }
        FlagPlacement::BeforePositionals => {
            append_options(&mut args, &options);
            push_positionals(&mut args, request);
        }
    }

    if !request.trailing().is_empty() {
        if let Some(separator) = command.trailing_separator() {
            args.append(separator);
        }
        args.extend_from(request.trailing());
    }

    args
}

fn push_positionals(args: &mut ProcessArguments, request: &CommandRequest) {
    for positional in request.positionals() {
        args.push(positional.clone());
    }
}

fn append_options(args: &mut ProcessArguments, options: &[CommandOption<'_>]) {
    for option in options {
        append_option(args, option);
    }
}

fn append_option(args: &mut ProcessArguments, option: &CommandOption<'_>) {
    let flag = option.flag;
    match option.value {
        OptionValue::Switch(on) => {
            if on {
                args.append(flag);
            }
        }
        OptionValue::Text(Some(value)) => {
            args.append_switch(flag, value);
        }
        OptionValue::Path(Some(path)) => {
            args.append_switch(flag, path.to_string_lossy());
        }
        OptionValue::Secret(Some(value)) => {
            args.append_switch_secret(flag, value);
        }
        OptionValue::Bool(Some(value)) => {
            args.append(flag).append(if value { "true" } else { "false" });
        }
        OptionValue::Number(Some(value)) => {
            args.append(flag).append(value.to_string());
        }
        OptionValue::Verbosity(Some(verbosity)) => {
            args.append(flag).append(verbosity.as_str());
        }
        OptionValue::Repeated(values) => {
            for value in values {
                args.append_switch(flag, value.as_str());
            }
        }
        OptionValue::RepeatedPaths(paths) => {
            for path in paths {
                args.append_switch(flag, path.to_string_lossy());
            }
        }
        OptionValue::Joined(values, delimiter) => {
            if !values.is_empty() {
                args.append_switch(flag, join(values, delimiter));
            }
        }
        OptionValue::Attached(values, delimiter) => {
            if !values.is_empty() {
                args.push(Argument::quoted(format!("{}{}", flag, join(values, delimiter))));
            }
        }
        OptionValue::Properties(properties) => {
            for (name, values) in properties {
                let value = values
                    .iter()
                    .map(|v| escape_msbuild(v))
                    .collect::<Vec<_>>()
                    .join(MSBUILD_LIST_SEPARATOR);
                args.push(Argument::quoted(format!("{}{}={}", flag, name, value)));
            }
        }
        OptionValue::Text(None)
        | OptionValue::Path(None)
        | OptionValue::Secret(None)
        | OptionValue::Bool(None)
        | OptionValue::Number(None)
        | OptionValue::Verbosity(None) => {}
    }
}

fn join(values: &[String], delimiter: char) -> String {
    values.join(&delimiter.to_string())
}

/// Escaped `;` separating the values of a multi-valued property.
const MSBUILD_LIST_SEPARATOR: &str = "%3B";

/// Escape the characters MSBuild's `-property` switch would split on.
///
/// MSBuild unescapes `%XX` when the property is read, so the build sees the
/// original value.
fn escape_msbuild(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            ';' => escaped.push_str("%3B"),
            ',' => escaped.push_str("%2C"),
            c => escaped.push(c),
        }
    }
    escaped
}
