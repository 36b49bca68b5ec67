use crate::core::constants::languages;
use crate::core::types::Language;

/// Indicator substrings checked, case-sensitively, against the trimmed
/// snippet. Several sets overlap (`class ` appears in Java, C++ and Python),
/// so the declared priority order is load-bearing: the first language with
/// any match wins, and every downstream rule set is keyed off the result.
const PYTHON_INDICATORS: &[&str] = &[
    "def ", "import ", "from ", "print(", "if __name__", "lambda ", "yield ", "try:",
    "except:", "finally:", "with ", "as ", "elif ", "else:", "@", "__init__", "self.",
    "None", "True", "False",
];

const JAVA_INDICATORS: &[&str] = &[
    "public class", "public static void main", "System.out.println", "import java.",
    "private ", "protected ", "public ", "extends ", "implements ", "@Override", "class ",
    "interface ", "package ", "throws ", "throw new",
];

const CPP_INDICATORS: &[&str] = &[
    "#include <iostream>", "#include <vector>", "#include <string>", "using namespace std",
    "std::", "cout <<", "cin >>", "::", "class ", "public:", "private:", "protected:",
    "template<", "typename ", "nullptr", "auto ", "constexpr ", "override ", "final ",
];

const C_INDICATORS: &[&str] = &[
    "#include <stdio.h>", "#include <stdlib.h>", "#include <string.h>", "#include <math.h>",
    "printf(", "scanf(", "malloc(", "calloc(", "free(", "struct ", "typedef ", "enum ",
    "#define ", "#ifdef ", "#ifndef ", "#endif", "#pragma ", "->", "sizeof(", "strlen(",
];

const TYPESCRIPT_INDICATORS: &[&str] = &[
    "interface ", "type ", "enum ", "as ", "public ", "private ", "protected ", "readonly ",
    "abstract ", "implements ", "extends ", ": string", ": number", ": boolean", ": any",
    ": void", "Array<", "Promise<", "Map<", "Set<", "<>", "@", "namespace ", "module ",
    "declare ", "keyof ", "typeof ", "is ",
];

const JAVASCRIPT_INDICATORS: &[&str] = &[
    "function ", "=>", "console.log", "const ", "let ", "var ", "return ", "if (", "for (",
    "while (", "switch (", "case ", "break;", "continue;", "document.", "window.",
    "setTimeout", "setInterval", "addEventListener", "async ", "await ", "Promise",
    "async function", "new Promise",
];

/// Fixed classification priority: Python > Java > C++ > C > TypeScript >
/// JavaScript.
const PRIORITY: &[(Language, &[&str])] = &[
    (Language::Python, PYTHON_INDICATORS),
    (Language::Java, JAVA_INDICATORS),
    (Language::Cpp, CPP_INDICATORS),
    (Language::C, C_INDICATORS),
    (Language::TypeScript, TYPESCRIPT_INDICATORS),
    (Language::JavaScript, JAVASCRIPT_INDICATORS),
];

/// Resolve the language for a snippet. An explicit hint short-circuits
/// classification: known names map to their variant, anything else resolves
/// to `Plain` (no per-language rules run). With the `auto` sentinel, the
/// indicator sets are consulted in priority order, then a coarse punctuation
/// fallback, and finally the JavaScript default.
pub fn detect(code: &str, hint: &str) -> Language {
    let hint = hint.trim();
    if !hint.is_empty() && !hint.eq_ignore_ascii_case(languages::AUTO) {
        return hint.parse().unwrap_or(Language::Plain);
    }

    let text = code.trim();
    if text.is_empty() {
        return Language::JavaScript;
    }

    for (language, indicators) in PRIORITY {
        if indicators.iter().any(|indicator| text.contains(indicator)) {
            return *language;
        }
    }

    if text.contains('{') && text.contains('}') {
        Language::JavaScript
    } else if text.contains("def ") || text.contains("class ") {
        Language::Python
    } else if text.contains("#include") {
        Language::C
    } else {
        Language::JavaScript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("def foo():\n    pass", Language::Python ; "python function")]
    #[test_case(
        "public class Foo { public static void main(String[] a){} }",
        Language::Java ; "java main class"
    )]
    #[test_case("#include <iostream>\nint main() {}", Language::Cpp ; "cpp include")]
    #[test_case("#include <stdio.h>\nint main() {}", Language::C ; "c include")]
    #[test_case("const x: string = 'a';", Language::TypeScript ; "ts type annotation")]
    #[test_case("console.log('hi')", Language::JavaScript ; "js console")]
    fn detects_language(code: &str, expected: Language) {
        assert_eq!(detect(code, "auto"), expected);
    }

    #[test]
    fn empty_input_defaults_to_javascript() {
        assert_eq!(detect("", "auto"), Language::JavaScript);
        assert_eq!(detect("   \n\t", "auto"), Language::JavaScript);
    }

    #[test]
    fn explicit_hint_wins_over_content() {
        assert_eq!(detect("def foo(): pass", "java"), Language::Java);
    }

    #[test]
    fn unknown_hint_resolves_to_plain() {
        assert_eq!(detect("def foo(): pass", "cobol"), Language::Plain);
    }

    #[test]
    fn python_beats_java_on_overlap() {
        // "@" is also how Java spells annotations; Python has priority
        assert_eq!(detect("@decorator\nx = None", "auto"), Language::Python);
    }

    #[test]
    fn java_beats_cpp_on_class_keyword() {
        assert_eq!(detect("public class Foo {}", "auto"), Language::Java);
    }

    #[test]
    fn punctuation_fallback_picks_javascript_for_braces() {
        assert_eq!(detect("{ x }", "auto"), Language::JavaScript);
    }

    #[test]
    fn bare_include_falls_back_to_c() {
        assert_eq!(detect("#include \"local.h\"", "auto"), Language::C);
    }
}
