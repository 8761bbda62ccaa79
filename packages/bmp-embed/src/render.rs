//! Text rendering of the declaration and definition files.

use std::path::Path;

use crate::SymbolNames;

/// Number of byte tokens on each line of the array literal.
pub const BYTES_PER_LINE: usize = 16;

const INDENT: &str = "    ";

fn provenance(source: &Path) -> String {
    format!(
        "// Auto-generated from {}\n// Do not edit manually\n",
        source.display()
    )
}

/// Render the declaration file for `names`.
pub fn render_declaration(source: &Path, names: &SymbolNames) -> String {
    format!(
        "{}\n#pragma once\n#include <cstdint>\n\n\
        extern const uint8_t {}[];\n\
        extern const uint32_t {};\n",
        provenance(source),
        names.array,
        names.size,
    )
}

/// Render the definition file holding every byte of `bytes`.
///
/// `include` is the file name of the declaration file.
pub fn render_definition(
    source: &Path,
    include: &str,
    names: &SymbolNames,
    bytes: &[u8],
) -> String {
    let mut out = provenance(source);

    out.push_str(&format!(
        "\n#include \"{include}\"\n\nconst uint8_t {}[] = {{\n",
        names.array
    ));
    out.push_str(&render_array_body(bytes));
    out.push_str(&format!(
        "}};\n\nconst uint32_t {} = {};\n",
        names.size,
        bytes.len()
    ));

    out
}

/// Body lines of the array literal, each terminated by a newline. Every
/// token but the last is followed by `", "`, so full lines end in a space.
/// Empty for empty input.
fn render_array_body(bytes: &[u8]) -> String {
    let lines: Vec<String> = bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let tokens: Vec<String> =
                chunk.iter().map(|byte| format!("0x{byte:02x}")).collect();
            format!("{INDENT}{}", tokens.join(", "))
        })
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    let mut body = lines.join(", \n");
    body.push('\n');
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> SymbolNames {
        SymbolNames::from_stem("logo")
    }

    #[test]
    fn declaration_layout() {
        let text = render_declaration(Path::new("assets/logo.bmp"), &names());

        assert_eq!(
            text,
            "// Auto-generated from assets/logo.bmp\n\
             // Do not edit manually\n\
             \n\
             #pragma once\n\
             #include <cstdint>\n\
             \n\
             extern const uint8_t logo_bmp[];\n\
             extern const uint32_t logo_bmp_size;\n"
        );
    }

    #[test]
    fn definition_wraps_after_sixteen_bytes() {
        let bytes: Vec<u8> = (0x00..=0x10).collect();
        let text = render_definition(
            Path::new("assets/logo.bmp"),
            "logo.hpp",
            &names(),
            &bytes,
        );

        assert_eq!(
            text,
            "// Auto-generated from assets/logo.bmp\n\
             // Do not edit manually\n\
             \n\
             #include \"logo.hpp\"\n\
             \n\
             const uint8_t logo_bmp[] = {\n    \
             0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, \
             0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, \n    \
             0x10\n\
             };\n\
             \n\
             const uint32_t logo_bmp_size = 17;\n"
        );
    }

    #[test]
    fn empty_input_has_empty_initializer() {
        let text =
            render_definition(Path::new("empty.bmp"), "empty.hpp", &names(), &[]);

        assert!(text.contains("const uint8_t logo_bmp[] = {\n};\n"));
        assert!(text.ends_with("const uint32_t logo_bmp_size = 0;\n"));
    }

    #[test]
    fn exact_multiple_of_sixteen_has_no_blank_line() {
        let bytes = [0xffu8; 32];
        let body = render_array_body(&bytes);
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("0xff, "));
        assert!(lines[1].ends_with("0xff"));
        assert!(body.ends_with("0xff\n"));
        assert!(!body.contains("\n\n"));
    }

    #[test]
    fn bytes_render_as_lowercase_two_digit_hex() {
        let body = render_array_body(&[0x0a, 0xbc, 0x00]);
        assert_eq!(body, "    0x0a, 0xbc, 0x00\n");
    }
}
