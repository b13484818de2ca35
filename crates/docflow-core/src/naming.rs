//! Derivación determinista de nombres de artifacts.
//!
//! Regla: dado el nombre fuente `S`, el ordinal `N` del step y su formato
//! de salida `ext`:
//! 1. Se separa `S` en base/extensión por el último `.` (sin `.`, todo `S`
//!    es la base) y se descarta la extensión vieja.
//! 2. Si la base termina en `_<dígitos>`, ese sufijo se reemplaza por
//!    `_<N>`; si no, se agrega `_<N>`.
//! 3. El resultado es `base.ext`.
//!
//! El nombre derivado revela la raíz del linaje y la posición en el
//! pipeline, y es idempotente: re-ejecutar el step N sobrescribe el mismo
//! nombre lógico en lugar de acumular sufijos (`_1_1`).

/// Calcula el nombre del artifact producido por el step `ordinal` a partir
/// del nombre de su artifact fuente. Función pura.
pub fn derived_name(source_name: &str, ordinal: u32, output_format: &str) -> String {
    let base = match source_name.rsplit_once('.') {
        Some((base, _old_ext)) => base,
        None => source_name,
    };

    let stem = match base.rsplit_once('_') {
        Some((head, digits)) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{head}_{ordinal}")
        }
        _ => format!("{base}_{ordinal}"),
    };

    format!("{stem}.{output_format}")
}

#[cfg(test)]
mod tests {
    use super::derived_name;

    #[test]
    fn appends_ordinal_when_no_suffix() {
        assert_eq!(derived_name("doc.txt", 1, "json"), "doc_1.json");
    }

    #[test]
    fn replaces_existing_numeric_suffix() {
        assert_eq!(derived_name("doc_3.txt", 4, "json"), "doc_4.json");
    }

    #[test]
    fn handles_source_without_extension() {
        assert_eq!(derived_name("doc", 2, "json"), "doc_2.json");
    }

    #[test]
    fn replacing_with_same_ordinal_is_noop() {
        assert_eq!(derived_name("doc_2.json", 2, "json"), "doc_2.json");
    }

    #[test]
    fn non_numeric_suffix_is_kept() {
        assert_eq!(derived_name("doc_final.txt", 3, "md"), "doc_final_3.md");
    }

    #[test]
    fn multi_digit_suffix_is_replaced_whole() {
        assert_eq!(derived_name("report_12.pdf", 2, "json"), "report_2.json");
    }

    #[test]
    fn only_last_dot_counts_as_extension() {
        assert_eq!(derived_name("a.b.c", 5, "txt"), "a.b_5.txt");
    }

    #[test]
    fn deterministic_across_calls() {
        let a = derived_name("in.dat", 7, "bin");
        let b = derived_name("in.dat", 7, "bin");
        assert_eq!(a, b);
    }
}
