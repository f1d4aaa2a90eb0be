use std::collections::BTreeSet;

/// Split an SPDX-style license expression into its identifier tokens.
///
/// Parentheses and the `AND` / `OR` connectives are dropped, as is the `WITH`
/// keyword. The exception named after `WITH` is kept as a token of its own, so
/// `Apache-2.0 WITH LLVM-exception` yields both `Apache-2.0` and
/// `LLVM-exception` and the exception needs a license map entry as well.
pub fn parse_license_expression(expr: &str) -> BTreeSet<String> {
    expr.replace(['(', ')'], " ")
        .split_whitespace()
        .filter(|token| !matches!(*token, "AND" | "OR"))
        .filter(|token| !token.eq_ignore_ascii_case("WITH"))
        .map(str::to_string)
        .collect()
}
