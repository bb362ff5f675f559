/*
 * test_json_filter.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! End-to-end tests: pandoc JSON in, pandoc JSON out.

use beamer_filter::{BeamerRewriter, DiagnosticMessage, Environment, FilterConfig, filter_json};
use serde_json::{Value, json};
use std::fs;

/// Create a minimal valid Pandoc JSON document with given blocks
fn make_json_doc(blocks: Value) -> String {
    json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {},
        "blocks": blocks
    })
    .to_string()
}

fn run_with(
    input: &str,
    format: &str,
    config: FilterConfig,
    env: Environment,
) -> (Value, Vec<DiagnosticMessage>) {
    let rewriter = BeamerRewriter::new(config, env);
    let mut output = Vec::new();
    let diagnostics = filter_json(&mut input.as_bytes(), &mut output, format, &rewriter)
        .expect("filter should succeed");
    let value = serde_json::from_slice(&output).expect("filter should write valid JSON");
    (value, diagnostics)
}

fn run(blocks: Value, format: &str) -> Value {
    run_with(
        &make_json_doc(blocks),
        format,
        FilterConfig::default(),
        Environment::default(),
    )
    .0
}

fn role(name: &str, text: &str) -> Value {
    json!({"t": "Code", "c": [["", ["interpreted-text"], [["role", name]]], text]})
}

fn para(inlines: Value) -> Value {
    json!({"t": "Para", "c": inlines})
}

fn raw_block(text: &str) -> Value {
    json!({"t": "RawBlock", "c": ["latex", text]})
}

#[test]
fn test_speaker_note_end_to_end() {
    let result = run(
        json!([{
            "t": "Div",
            "c": [["", ["container", "speakernote"], []], [para(json!([{"t": "Str", "c": "Hello"}]))]]
        }]),
        "beamer",
    );

    assert_eq!(
        result["blocks"],
        json!([
            raw_block("\\note{"),
            para(json!([{"t": "Str", "c": "Hello"}])),
            raw_block("}")
        ])
    );
}

#[test]
fn test_menu_role_end_to_end() {
    let result = run(json!([para(json!([role("menu", "File_Open")]))]), "beamer");
    assert_eq!(
        result["blocks"][0]["c"][0],
        json!({"t": "RawInline", "c": ["latex", "\\colorbox{adacore2}{\\textcolor{white}{File\\_Open}}"]})
    );
}

#[test]
fn test_roles_in_headers_and_metadata() {
    let input = json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {
            "title": {"t": "MetaInlines", "c": [role("toolname", "GNAT")]}
        },
        "blocks": [{
            "t": "Header",
            "c": [2, ["intro", [], []], [role("toolname", "GPS")]]
        }]
    })
    .to_string();

    let (result, diagnostics) = run_with(
        &input,
        "beamer",
        FilterConfig::default(),
        Environment::default(),
    );
    assert!(diagnostics.is_empty());
    assert_eq!(
        result["meta"]["title"],
        json!({"t": "MetaInlines", "c": [{"t": "SmallCaps", "c": [{"t": "Str", "c": "GNAT"}]}]})
    );
    assert_eq!(
        result["blocks"][0],
        json!({
            "t": "Header",
            "c": [
                2,
                ["intro", ["t", "shrink"], []],
                [{"t": "SmallCaps", "c": [{"t": "Str", "c": "GPS"}]}]
            ]
        })
    );
}

#[test]
fn test_html_output_keeps_slide_structure() {
    let blocks = json!([
        {"t": "Header", "c": [2, ["", [], []], [{"t": "Str", "c": "Slide"}]]},
        {"t": "BlockQuote", "c": [{"t": "BulletList", "c": [[{"t": "Plain", "c": [{"t": "Str", "c": "a"}]}]]}]},
        {"t": "Div", "c": [["", ["container", "animate", "3"], []], [para(json!([{"t": "Str", "c": "x"}]))]]}
    ]);
    let result = run(blocks.clone(), "html");
    assert_eq!(result["blocks"], blocks);
}

#[test]
fn test_raw_role_in_html_is_unchanged_with_warning() {
    let input = make_json_doc(json!([para(json!([role("command", "make")]))]));
    let (result, diagnostics) = run_with(
        &input,
        "html",
        FilterConfig::default(),
        Environment::default(),
    );
    assert_eq!(result["blocks"][0]["c"][0], role("command", "make"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some("B-3-1"));
}

#[test]
fn test_repeated_attribute_keys_pass_through() {
    let blocks = json!([{
        "t": "Div",
        "c": [
            ["", ["note"], [["data-x", "1"], ["data-y", "2"], ["data-x", "3"]]],
            [para(json!([{"t": "Str", "c": "x"}]))]
        ]
    }]);
    assert_eq!(run(blocks.clone(), "html")["blocks"], blocks);
    assert_eq!(run(blocks.clone(), "beamer")["blocks"], blocks);
}

#[test]
fn test_repeated_role_key_uses_first_pair() {
    let code = json!({
        "t": "Code",
        "c": [["", ["interpreted-text"], [["role", "menu"], ["x", "1"], ["role", "command"]]], "Edit"]
    });
    let result = run(json!([para(json!([code]))]), "beamer");
    assert_eq!(
        result["blocks"][0]["c"][0],
        json!({"t": "RawInline", "c": ["latex", "\\colorbox{adacore2}{\\textcolor{white}{Edit}}"]})
    );
}

#[test]
fn test_bullet_quote_is_stripped() {
    let bullets = json!({"t": "BulletList", "c": [[{"t": "Plain", "c": [{"t": "Str", "c": "a"}]}]]});
    let result = run(json!([{"t": "BlockQuote", "c": [bullets.clone()]}]), "beamer");
    assert_eq!(result["blocks"], json!([bullets]));
}

#[test]
fn test_animate_and_latex_environment_nesting() {
    let inner = json!({
        "t": "Div",
        "c": [["", ["container", "animate", "3-"], []], [para(json!([{"t": "Str", "c": "later"}]))]]
    });
    let result = run(
        json!([{
            "t": "Div",
            "c": [["", ["container", "latex_environment", "small"], []], [inner]]
        }]),
        "beamer",
    );

    // The animate div is a replacement block of the environment, so it is
    // not offered to the rewriter itself.
    assert_eq!(result["blocks"][0], raw_block("\\begin{small}"));
    assert_eq!(result["blocks"][1]["t"], "Div");
    assert_eq!(result["blocks"][2], raw_block("\\end{small}"));
}

#[test]
fn test_animate_container() {
    let result = run(
        json!([{
            "t": "Div",
            "c": [["", ["container", "animate", "3-"], []], [para(json!([{"t": "Str", "c": "later"}]))]]
        }]),
        "beamer",
    );
    assert_eq!(
        result["blocks"],
        json!([
            raw_block("\\begin{visibleenv}<3->"),
            para(json!([{"t": "Str", "c": "later"}])),
            raw_block("\\end{visibleenv}")
        ])
    );
}

#[test]
fn test_language_variant_admonition() {
    let words = |a: &str, b: &str| {
        para(json!([{"t": "Str", "c": a}, {"t": "Space"}, {"t": "Str", "c": b}]))
    };
    let result = run(
        json!([{
            "t": "Div",
            "c": [["", ["admonition", "language-variant"], []], [words("Language", "Variant"), words("Ada", "2012")]]
        }]),
        "beamer",
    );
    assert_eq!(
        result["blocks"],
        json!([raw_block(
            "\\framesubtitle{\\rightline{\\colorbox{adacore2}{Ada 2012}\\hspace{1cm}}}"
        )])
    );
}

#[test]
fn test_source_include_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.adb");
    fs::write(
        &path,
        "procedure Main is\n--begin\n   null;\n--end\nend Main;\n",
    )
    .unwrap();

    let classes = json!([
        "container",
        "source_include",
        path.to_string_lossy(),
        ":start-after:--begin",
        ":end-before:--end",
        ":code:ada"
    ]);
    let result = run(
        json!([{"t": "Div", "c": [["", classes, []], []]}]),
        "beamer",
    );
    assert_eq!(
        result["blocks"],
        json!([{"t": "CodeBlock", "c": [["", ["ada"], []], "   null;\n"]}])
    );
}

#[test]
fn test_source_include_missing_file() {
    let input = make_json_doc(json!([{
        "t": "Div",
        "c": [["", ["container", "source_include", "labs/nowhere.adb"], []], []]
    }]));
    let (result, diagnostics) = run_with(
        &input,
        "beamer",
        FilterConfig::default(),
        Environment::default(),
    );
    assert_eq!(
        result["blocks"],
        json!([{"t": "CodeBlock", "c": [["", ["Ada"], []], "labs/nowhere.adb"]}])
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some("B-2-2"));
}

#[test]
fn test_image_resolved_from_search_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("logo.png"), b"png").unwrap();
    let env = Environment {
        instructor: false,
        search_path: Some(dir.path().to_string_lossy().into_owned()),
    };

    let image = |target: &str| {
        json!({"t": "Image", "c": [["", [], []], [{"t": "Str", "c": "logo"}], [target, "fig:"]]})
    };
    let input = make_json_doc(json!([para(json!([image("images/logo.png")]))]));

    // Images are resolved whatever the output format.
    let (result, _) = run_with(&input, "html", FilterConfig::default(), env);
    let expected = dir.path().join("logo.png").to_string_lossy().into_owned();
    assert_eq!(result["blocks"][0]["c"][0], image(&expected));
}

#[test]
fn test_instructor_mode_reveals_answers() {
    let input = make_json_doc(json!([para(json!([role("answer", "B")]))]));
    let env = Environment {
        instructor: true,
        search_path: None,
    };
    let (result, _) = run_with(&input, "beamer", FilterConfig::default(), env);
    assert_eq!(
        result["blocks"][0]["c"][0],
        json!({"t": "RawInline", "c": ["latex", "\\textit<2>{\\textbf<2>{\\textcolor<2>{green!65!black}{B}}}"]})
    );
}

#[test]
fn test_configured_decorators_and_roles() {
    let config = FilterConfig::from_yaml_str(
        "slide-decorators: [fragile]\nroles:\n  keyword: small-caps\n",
    )
    .unwrap();
    let input = make_json_doc(json!([
        {"t": "Header", "c": [3, ["", ["x"], []], [role("keyword", "begin")]]}
    ]));
    let (result, _) = run_with(&input, "beamer", config, Environment::default());
    assert_eq!(
        result["blocks"][0],
        json!({
            "t": "Header",
            "c": [3, ["", ["x", "fragile"], []], [{"t": "SmallCaps", "c": [{"t": "Str", "c": "begin"}]}]]
        })
    );
}

#[test]
fn test_api_version_is_preserved() {
    let input = json!({"pandoc-api-version": [1, 22, 2, 1], "meta": {}, "blocks": []}).to_string();
    let (result, _) = run_with(
        &input,
        "beamer",
        FilterConfig::default(),
        Environment::default(),
    );
    assert_eq!(result["pandoc-api-version"], json!([1, 22, 2, 1]));
}
