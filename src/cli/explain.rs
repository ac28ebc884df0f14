pub const AVAILABLE_RULES: &[(&str, &str)] = &[
    (
        "unwrap-used",
        "Flags .unwrap()/.expect() calls that can panic",
    ),
    (
        "wildcard-import",
        "Flags glob imports (use path::*)",
    ),
    (
        "banned-call",
        "Flags calls to functions on a configured deny-list",
    ),
    (
        "max-nesting",
        "Flags blocks nested deeper than the configured limit",
    ),
    (
        "function-length",
        "Flags functions longer than the configured line limit",
    ),
    (
        "custom",
        "User-defined regex patterns from config, reported as custom:<name>",
    ),
];

pub fn list_rules() -> String {
    use std::fmt::Write;
    let mut out = String::from("Available rules:\n\n");
    for (name, desc) in AVAILABLE_RULES {
        let _ = writeln!(out, "  {name:<20} {desc}");
    }
    out.push_str("\nRun `astlint explain <rule>` for details.");
    out
}

pub fn explain(rule: &str) -> Option<&'static str> {
    match rule {
        "unwrap-used" => Some(
            "unwrap-used\n\n\
             Flags `.unwrap()` and `.expect()` method calls.\n\n\
             Both turn a recoverable error or absent value into a panic at\n\
             runtime. Library and application code should propagate errors\n\
             with `?` or handle the `None`/`Err` case explicitly. Test code\n\
             is exempt by default via the `allow` globs in config:\n\n\
             [rules.unwrap_used]\n\
             allow = [\"tests/**\"]",
        ),
        "wildcard-import" => Some(
            "wildcard-import\n\n\
             Flags glob imports such as `use std::collections::*;`.\n\n\
             Glob imports hide where a name comes from and can silently\n\
             change meaning when the imported module grows. Import names\n\
             explicitly instead.",
        ),
        "banned-call" => Some(
            "banned-call\n\n\
             Flags calls to functions on a deny-list you configure.\n\n\
             A bare name (`leak`) bans any method or call whose path ends\n\
             in that name; a full path (`std::process::exit`) bans exactly\n\
             that path:\n\n\
             [rules.banned_call]\n\
             functions = [\"std::process::exit\", \"leak\"]",
        ),
        "max-nesting" => Some(
            "max-nesting\n\n\
             Flags blocks nested deeper than `max_depth` (default 5),\n\
             counting enclosing blocks from the function body outward.\n\
             Deep nesting usually wants early returns or extracted\n\
             functions. Only the first block past the limit is reported.",
        ),
        "function-length" => Some(
            "function-length\n\n\
             Flags functions spanning more than `max_lines` lines\n\
             (default 100), measured from signature to closing brace.",
        ),
        "custom" => Some(
            "custom\n\n\
             User-defined regex rules declared in config. Each pattern is\n\
             its own rule, reported as custom:<name>:\n\n\
             [[rules.custom_patterns]]\n\
             name = \"todo-comment\"\n\
             pattern = \"(?i)\\\\bTODO\\\\b\"\n\
             severity = \"info\"\n\
             message = \"TODO comment found\"",
        ),
        _ => None,
    }
}
