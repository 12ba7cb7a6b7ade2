//! Constant transpilation and literal encoding.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use tracing::warn;
use typeshift_core::utils::quote;
use typeshift_core::{Literal, NamedRef, Symbol};

use super::Transpiler;

/// Largest integer exactly representable by the output numeric type.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

impl Transpiler<'_> {
    /// Emit `export const NAME[: Type] = value`. A value the encoder
    /// cannot represent drops the whole symbol: the placeholder is
    /// removed rather than leaving a partial definition behind.
    pub(crate) fn transpile_const(
        &mut self,
        symbol: &Symbol,
        value: &Literal,
        named: Option<&NamedRef>,
        module: &str,
    ) {
        self.set_def(module, &symbol.name, String::new());

        let ty_text = named.map(|r| self.render_named(r, module));
        let Some(encoded) = encode_literal(value) else {
            warn!(symbol = %symbol.name, "constant value has no representation, dropped");
            self.remove_def(module, &symbol.name);
            return;
        };

        let def = match ty_text {
            Some(ty) => format!("export const {}: {} = {}", symbol.name, ty, encoded),
            None => format!("export const {} = {}", symbol.name, encoded),
        };
        self.set_def(module, &symbol.name, def);
    }
}

/// Encode a literal as output text. `None` means the kind has no
/// representation (complex values, division by zero, non-finite floats).
pub(crate) fn encode_literal(value: &Literal) -> Option<String> {
    match value {
        Literal::Bool(b) => Some(b.to_string()),
        Literal::Str(s) => Some(quote(s)),
        Literal::Int(i) => {
            let mut text = i.to_str_radix(10);
            if !in_safe_range(i) {
                text.push('n'); // BigInt literal
            }
            Some(text)
        }
        Literal::Rational { numer, denom } => {
            if denom.is_zero() {
                return None;
            }
            let v = numer.to_f64()? / denom.to_f64()?;
            v.is_finite().then(|| v.to_string())
        }
        Literal::Float(f) => f.is_finite().then(|| f.to_string()),
        Literal::Complex { .. } => None,
    }
}

/// Exact arbitrary-precision range check. Floating conversion would be
/// wrong exactly at the boundary, where it matters most.
fn in_safe_range(i: &BigInt) -> bool {
    i.abs() <= BigInt::from(MAX_SAFE_INTEGER)
}
