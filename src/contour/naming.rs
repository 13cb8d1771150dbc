//! Contour name templating.
//!
//! Templates substitute a closed set of keys — `{object}`, `{position}`,
//! `{index}` — against the values of one contour level. Anything else is an
//! error the stack builder recovers from with [`generated_name`].

use crate::errors::NameError;
use crate::float_types::Real;

/// Values available to a name template for one contour level.
#[derive(Debug, Clone, Copy)]
pub struct NameContext<'a> {
    /// Name of the source object being contoured.
    pub object: &'a str,
    /// Height of the cutting plane for this level.
    pub position: Real,
    /// Zero-based level index.
    pub index: usize,
}

/// Render `template`, replacing each `{key}` placeholder from `ctx`.
///
/// # Example
/// ```rust
/// # use isoline::contour::naming::{NameContext, render};
/// let ctx = NameContext { object: "Cube", position: 3.0, index: 1 };
/// let name = render("{object}_Contour_{position}m", &ctx).unwrap();
/// assert_eq!(name, "Cube_Contour_3.0m");
/// ```
pub fn render(template: &str, ctx: &NameContext) -> Result<String, NameError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return Err(NameError::Unclosed(template.len() - rest.len() + open));
        };
        match &after[..close] {
            "object" => out.push_str(ctx.object),
            "position" => out.push_str(&format_position(ctx.position)),
            "index" => out.push_str(&ctx.index.to_string()),
            unknown => return Err(NameError::UnknownKey(unknown.to_string())),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Fallback name for a level whose template failed to render.
pub fn generated_name(position: Real) -> String {
    format!("GeneratedContour_{}", format_position(position))
}

/// Heights always carry a decimal point ("3.0", not "3").
fn format_position(position: Real) -> String {
    format!("{position:?}")
}
