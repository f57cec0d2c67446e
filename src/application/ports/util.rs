// src/application/ports/util.rs

/// Best-effort conversion of arbitrary Unicode text into Latin script.
///
/// Implementations only need to approximate; the slug normalizer strips
/// whatever non-ASCII output remains.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, text: &str) -> String;
}
