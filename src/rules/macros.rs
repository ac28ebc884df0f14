#[macro_export]
macro_rules! emit {
    ($out:expr, $rule:expr, $tree:expr, $line:expr, $column:expr, $severity:expr, $($msg:tt)+) => {
        $out.push($crate::types::Violation {
            rule: $rule.to_string(),
            file: $tree.path.clone(),
            line: $line,
            column: $column,
            severity: $severity,
            kind: $crate::types::ViolationKind::Lint,
            message: format!($($msg)+),
        });
    };
}
