use uri_meta::fetch::NoManifest;
use uri_meta::{Candidate, Driver, Error, Field, HtmlSource, Options, UriMetaExtractor};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.skips, vec!["localhost", "127", "172", "192"]);
    assert_eq!(options.drivers.len(), 1);
    assert_eq!(options.drivers[0].name(), "http");
    assert_eq!(options.timeout_secs, 30);
    assert!(options.fetch_manifest);
    assert!(!options.strip_slogan);
    assert!(options.user_agent.contains("Chrome"));
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        skips: Vec::new(),
        ..Options::default()
    };

    assert!(options.skips.is_empty());
    assert_eq!(options.drivers.len(), 1);
    assert_eq!(options.possibles, Options::default().possibles);
}

#[test]
fn toml_file_configures_drivers_and_chains() {
    let toml = r#"
        skips = ["localhost", "10."]
        user_agent = "uri-meta-test/1.0"
        timeout_secs = 5
        fetch_manifest = false

        [[drivers]]
        kind = "headless"
        binary = "/opt/chrome/chrome"
        args = ["--no-sandbox"]

        [[drivers]]
        kind = "http"
        headers = { "Accept-Language" = "en" }

        [possibles]
        description = [
            { selector = 'meta[name="summary"]', field = "content" },
            { selector = "title", field = "text" },
        ]
    "#;

    let options = match Options::from_toml_str(toml) {
        Ok(options) => options,
        Err(err) => panic!("config should parse: {err:?}"),
    };

    assert_eq!(options.skips, vec!["localhost", "10."]);
    assert_eq!(options.fetch_defaults().user_agent, "uri-meta-test/1.0");
    assert_eq!(options.fetch_defaults().timeout.as_secs(), 5);
    assert!(!options.fetch_manifest);

    let names: Vec<&str> = options.drivers.iter().map(HtmlSource::name).collect();
    assert_eq!(names, vec!["headless", "http"]);
    match &options.drivers[0] {
        Driver::Headless(driver) => assert_eq!(driver.args, vec!["--no-sandbox"]),
        other => panic!("expected headless driver, got {other:?}"),
    }

    assert_eq!(
        options.possibles.description,
        vec![
            Candidate::attr(r#"meta[name="summary"]"#, "content"),
            Candidate { selector: "title".to_string(), field: Field::Text },
        ]
    );
    // Chains not mentioned keep their defaults.
    assert_eq!(options.possibles.title, Options::default().possibles.title);
}

#[test]
fn custom_description_chain_is_used() {
    let toml = r#"
        [possibles]
        description = [{ selector = 'meta[name="summary"]', field = "content" }]
    "#;
    let options = match Options::from_toml_str(toml) {
        Ok(options) => options,
        Err(err) => panic!("config should parse: {err:?}"),
    };
    let extractor = UriMetaExtractor::new(options).with_manifest_source(NoManifest);

    let html = r#"<head>
        <meta name="description" content="ignored">
        <meta name="summary" content="  The summary.  ">
    </head>"#;
    match extractor.from_html(html, "https://site.test/post") {
        Ok(meta) => assert_eq!(meta.description(), "The summary."),
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn invalid_selector_in_config_yields_no_value() {
    let toml = r#"
        [possibles]
        keywords = [{ selector = "meta[[[", field = "content" }]
    "#;
    let options = match Options::from_toml_str(toml) {
        Ok(options) => options,
        Err(err) => panic!("config should parse: {err:?}"),
    };
    let extractor = UriMetaExtractor::new(options).with_manifest_source(NoManifest);

    match extractor.from_html(r#"<meta name="keywords" content="a,b">"#, "https://site.test/x") {
        Ok(meta) => assert!(meta.keywords().is_empty()),
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn malformed_config_is_a_config_error() {
    assert!(matches!(Options::from_toml_str("skips = 3"), Err(Error::Config(_))));
    assert!(matches!(
        Options::from_toml_str("[[drivers]]\nkind = \"telnet\""),
        Err(Error::Config(_))
    ));
}

#[test]
fn missing_config_file_is_a_config_error() {
    let result = Options::from_file("/nonexistent/uri-meta/options.toml");
    match result {
        Err(err @ Error::Config(_)) => assert!(err.to_string().contains("options.toml")),
        other => panic!("expected a config error, got {other:?}"),
    }
}
