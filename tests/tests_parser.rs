#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use incgraph::parser::{ErrorCode, Statement, includes, parse};
use rstest::rstest;

fn quoted(target: &str) -> Statement {
    Statement::QuotedInclude {
        target: target.to_string(),
    }
}

fn angled(target: &str) -> Statement {
    Statement::AngledInclude {
        target: target.to_string(),
    }
}

fn namespace(name: &str, body: Vec<Statement>) -> Statement {
    Statement::Namespace {
        name: name.to_string(),
        body,
    }
}

fn forward(name: &str) -> Statement {
    Statement::ForwardClass {
        name: name.to_string(),
    }
}

fn alias(alias: &str, target: &str) -> Statement {
    Statement::TypeAlias {
        alias: alias.to_string(),
        target: target.to_string(),
    }
}

fn function(return_type: &str, name: &str, parameters: &[&str], qualifiers: &[&str]) -> Statement {
    Statement::FunctionDeclaration {
        return_type: return_type.to_string(),
        name: name.to_string(),
        parameters: parameters.iter().map(|p| p.to_string()).collect(),
        qualifiers: qualifiers.iter().map(|q| q.to_string()).collect(),
    }
}

/// Parse `input` and require a clean result
fn assert_statements(input: &str, expected: Vec<Statement>) {
    let result = parse(input);
    assert!(result.ok(), "unexpected errors for {input:?}: {:?}", result.errors);
    assert_eq!(result.statements, expected, "statements for {input:?}");
}

// ============================================================================
// Includes
// ============================================================================

#[test]
fn test_quoted_include() {
    assert_statements("#include \"file.h\"", vec![quoted("file.h")]);
}

#[test]
fn test_angled_include() {
    assert_statements("#include <vector>", vec![angled("vector")]);
}

#[rstest]
#[case("#include<map>", angled("map"))]
#[case("#  include <sys/types.h>", angled("sys/types.h"))]
#[case("#include_next <stdlib.h>", angled("stdlib.h"))]
#[case("#import \"Foundation.h\"", quoted("Foundation.h"))]
#[case("#include \"../detail/impl.hpp\" // trailing", quoted("../detail/impl.hpp"))]
#[case("/* lead */ #include <memory>", angled("memory"))]
fn test_include_forms(#[case] input: &str, #[case] expected: Statement) {
    assert_statements(input, vec![expected]);
}

#[test]
fn test_multiple_includes_in_one_file() {
    let input = "// header guard style\n\
                 #pragma once\n\
                 #include \"file.h\"\n\
                 #include <vector>\n";
    assert_statements(
        input,
        vec![
            Statement::ignored("#pragma once"),
            quoted("file.h"),
            angled("vector"),
        ],
    );
}

#[test]
fn test_other_directives_are_ignored_lines() {
    let input = "#ifndef A_H\n#define A_H \\\n  1\n#include \"a.h\"\n#endif\n";
    assert_statements(
        input,
        vec![
            Statement::ignored("#ifndef A_H"),
            Statement::ignored("#define A_H \\\n  1"),
            quoted("a.h"),
            Statement::ignored("#endif"),
        ],
    );
}

#[test]
fn test_include_in_extern_c_block_is_kept() {
    let result = parse("extern \"C\" {\n#include <c_api.h>\n}\n#include \"after.h\"");
    assert!(result.ok());
    let targets: Vec<_> = includes(&result.statements)
        .iter()
        .map(|i| i.target)
        .collect();
    assert_eq!(targets, vec!["c_api.h", "after.h"]);
}

// ============================================================================
// Namespaces
// ============================================================================

#[test]
fn test_namespace_with_using_and_forward_declarations() {
    let input = r#"
namespace Foo {

class ForwardedClass;
using BarPtr = Ptr<Bar>;

}  // namespace Foo
"#;
    assert_statements(
        input,
        vec![namespace(
            "Foo",
            vec![forward("ForwardedClass"), alias("BarPtr", "Ptr<Bar>")],
        )],
    );
}

#[test]
fn test_three_level_nesting_preserves_order() {
    let input = r#"
namespace a {
  #include "x.h"
  namespace b {
    class Fwd;
    namespace c {
      using namespace std;
    }
    int f(int x);
  }
  ;
}
"#;
    assert_statements(
        input,
        vec![namespace(
            "a",
            vec![
                quoted("x.h"),
                namespace(
                    "b",
                    vec![
                        forward("Fwd"),
                        namespace(
                            "c",
                            vec![Statement::UsingDirective {
                                namespace_path: "std".to_string(),
                            }],
                        ),
                        function("int", "f", &["int x"], &[]),
                    ],
                ),
                Statement::Empty,
            ],
        )],
    );
}

#[rstest]
#[case("namespace { class Hidden; }", namespace("", vec![forward("Hidden")]))]
#[case("inline namespace v1 {}", namespace("v1", vec![]))]
#[case("namespace outer::inner { }", namespace("outer::inner", vec![]))]
fn test_namespace_forms(#[case] input: &str, #[case] expected: Statement) {
    assert_statements(input, vec![expected]);
}

// ============================================================================
// Using statements and aliases
// ============================================================================

#[rstest]
#[case("using namespace std::chrono;", Statement::UsingDirective { namespace_path: "std::chrono".to_string() })]
#[case("using std::string;", Statement::UsingDeclaration { qualified_names: vec!["std::string".to_string()] })]
#[case(
    "using std::swap, std::move;",
    Statement::UsingDeclaration { qualified_names: vec!["std::swap".to_string(), "std::move".to_string()] }
)]
#[case("using typename Base::type;", Statement::UsingDeclaration { qualified_names: vec!["Base::type".to_string()] })]
#[case("using Callback = void (*)(int);", alias("Callback", "void(*)(int)"))]
#[case("template <typename T> using Vec = std::vector<T>;", alias("Vec", "std::vector<T>"))]
#[case("typedef unsigned long size_type;", alias("size_type", "unsigned long"))]
#[case("typedef std::map<int, Foo*> FooMap;", alias("FooMap", "std::map<int, Foo*>"))]
fn test_using_statements(#[case] input: &str, #[case] expected: Statement) {
    assert_statements(input, vec![expected]);
}

// ============================================================================
// Forward declarations
// ============================================================================

#[rstest]
#[case("class Foo;", "Foo")]
#[case("struct stat;", "stat")]
#[case("union Value;", "Value")]
#[case("template <class T> class Box;", "Box")]
#[case("enum class Color : int;", "Color")]
#[case("enum struct Mode;", "Mode")]
#[case("enum Legacy : unsigned char;", "Legacy")]
#[case("class EXPORT_API Widget;", "Widget")]
fn test_forward_declarations(#[case] input: &str, #[case] name: &str) {
    assert_statements(input, vec![forward(name)]);
}

// ============================================================================
// Function declarations
// ============================================================================

#[rstest]
#[case("void f();", function("void", "f", &[], &[]))]
#[case(
    "static int add(int a, int b = 2);",
    function("static int", "add", &["int a", "int b = 2"], &[])
)]
#[case(
    "virtual const std::string& name() const noexcept override;",
    function("virtual const std::string&", "name", &[], &["const", "noexcept", "override"])
)]
#[case("virtual void draw() = 0;", function("virtual void", "draw", &[], &["= 0"]))]
#[case(
    "Widget& operator=(const Widget& other) = default;",
    function("Widget&", "operator=", &["const Widget& other"], &["= default"])
)]
#[case("auto begin() -> iterator;", function("auto", "begin", &[], &["-> iterator"]))]
#[case(
    "inline int square(int x) { return x * x; }",
    function("inline int", "square", &["int x"], &[])
)]
#[case(
    "template <typename T> T max(T a, T b);",
    function("T", "max", &["T a", "T b"], &[])
)]
#[case(
    "extern \"C\" int c_api(const char* name);",
    function("extern \"C\" int", "c_api", &["const char* name"], &[])
)]
#[case(
    "std::vector<std::pair<int, int>> pairs(std::map<int, int> m);",
    function("std::vector<std::pair<int, int>>", "pairs", &["std::map<int, int> m"], &[])
)]
#[case(
    "bool operator()(int a) const;",
    function("bool", "operator()", &["int a"], &["const"])
)]
fn test_function_declarations(#[case] input: &str, #[case] expected: Statement) {
    assert_statements(input, vec![expected]);
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn test_unmodelled_code_degrades_to_ignored() {
    assert_statements(
        "int x = 5;",
        vec![
            Statement::ignored("int"),
            Statement::ignored("x"),
            Statement::ignored("="),
            Statement::ignored("5"),
            Statement::Empty,
        ],
    );
}

#[test]
fn test_macro_invocation_is_ignored() {
    assert_statements(
        "DECLARE_THING(Foo);\n#include \"real.h\"",
        vec![
            Statement::ignored("DECLARE_THING"),
            Statement::ignored("("),
            Statement::ignored("Foo"),
            Statement::ignored(")"),
            Statement::Empty,
            quoted("real.h"),
        ],
    );
}

#[test]
fn test_class_definition_body_is_spliced() {
    let result = parse("class A {\npublic:\n  void run();\n};\n#include <b>");
    assert!(result.ok());
    assert_eq!(
        result.statements,
        vec![
            Statement::ignored("class"),
            Statement::ignored("A"),
            Statement::ignored("{"),
            Statement::ignored("public"),
            Statement::ignored(":"),
            function("void", "run", &[], &[]),
            Statement::ignored("}"),
            Statement::Empty,
            angled("b"),
        ]
    );
}

// ============================================================================
// Unbalanced input
// ============================================================================

#[test]
fn test_unclosed_namespace_keeps_partial_statements() {
    let input = "#include \"first.h\"\nnamespace outer {\n#include \"second.h\"\nvoid f();\n";
    let result = parse(input);

    assert!(!result.ok());
    assert_eq!(
        result.statements,
        vec![
            quoted("first.h"),
            namespace("outer", vec![quoted("second.h"), function("void", "f", &[], &[])]),
        ]
    );
    let error = result.structural_error().unwrap();
    assert_eq!(error.code, ErrorCode::E0202);
    assert_eq!(error.related.len(), 1);
}

#[test]
fn test_stray_closing_brace_stops_parsing() {
    let result = parse("#include <a>\n}\n#include <b>\n");
    assert_eq!(result.statements, vec![angled("a")]);
    assert_eq!(result.structural_error().unwrap().code, ErrorCode::E0205);
    assert!(result.into_result().is_err());
}

#[test]
fn test_unclosed_function_body_falls_back_to_block() {
    let result = parse("#include <a>\nvoid f() {\n");
    assert_eq!(
        result.statements,
        vec![
            angled("a"),
            Statement::ignored("void"),
            Statement::ignored("f"),
            Statement::ignored("("),
            Statement::ignored(")"),
            Statement::ignored("{"),
        ]
    );
    assert_eq!(result.structural_error().unwrap().code, ErrorCode::E0202);
}
