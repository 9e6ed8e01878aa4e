// src/noyau/symboles.rs

/// Remplace les glyphes localisés par les opérateurs ASCII :
/// `÷` -> `/`, `×` -> `*`. Rien d’autre ne change.
pub fn normaliser_symboles(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '÷' => '/',
            '×' => '*',
            _ => c,
        })
        .collect()
}
