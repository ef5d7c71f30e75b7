use domaincount::pipeline::{PipelineTuning, domain_from_row};
use domaincount::report::write_report;
use domaincount::utils::{PipelineDefaults, apply_file_to_opts, module_label, parse_settings};
use domaincount::{
    DomainCount, DomainCounts, Opts, OutputFormat, TallyOpts, build_report, extract_domain,
    is_valid_email,
};

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

// --- is_valid_email ---

#[test]
fn test_valid_email_simple() {
    assert!(is_valid_email("x@y.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    assert!(is_valid_email("a_b%c-d@sub-domain.io"));
}

#[test]
fn test_valid_email_rejects_surrounding_whitespace() {
    assert!(!is_valid_email(" x@y.com"));
    assert!(!is_valid_email("x@y.com "));
    assert!(!is_valid_email("x@y.com\n"));
}

#[test]
fn test_valid_email_rejects_missing_parts() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("@y.com"));
    assert!(!is_valid_email("x@"));
    assert!(!is_valid_email("x@y"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_valid_email_tld_needs_two_letters() {
    assert!(!is_valid_email("x@y.c"));
    assert!(!is_valid_email("x@y.c0m"));
    assert!(is_valid_email("x@y.co"));
}

#[test]
fn test_valid_email_rejects_two_at_signs() {
    assert!(!is_valid_email("x@z@y.com"));
}

#[test]
fn test_valid_email_rejects_non_ascii() {
    assert!(!is_valid_email("josé@example.com"));
    assert!(!is_valid_email("x@exämple.com"));
}

// --- extract_domain ---

#[test]
fn test_extract_domain_lowercases_domain() {
    assert_eq!(
        extract_domain("User@EXAMPLE.com"),
        Some("example.com".to_string())
    );
}

#[test]
fn test_extract_domain_invalid_is_none() {
    assert_eq!(extract_domain("not-an-email"), None);
    assert_eq!(extract_domain(" x@y.com "), None);
}

#[test]
fn test_extract_domain_keeps_subdomains() {
    assert_eq!(
        extract_domain("ops@Mail.Corp.Example.ORG"),
        Some("mail.corp.example.org".to_string())
    );
}

// --- domain_from_row ---

#[test]
fn test_domain_from_row_trims_email_field() {
    assert_eq!(
        domain_from_row(&row(&["a", "b", " X@Y.COM "])),
        Some("y.com".to_string())
    );
}

#[test]
fn test_domain_from_row_short_row_discarded() {
    assert_eq!(domain_from_row(&row(&["a", "b"])), None);
    assert_eq!(domain_from_row(&row(&[])), None);
}

#[test]
fn test_domain_from_row_uses_third_column_only() {
    assert_eq!(domain_from_row(&row(&["x@first.com", "b", "nope"])), None);
    assert_eq!(
        domain_from_row(&row(&["a", "b", "c@third.com", "d@fourth.com"])),
        Some("third.com".to_string())
    );
    assert_eq!(
        PipelineDefaults::EMAIL_FIELD_INDEX,
        2,
        "email is the third column"
    );
}

#[test]
fn test_domain_from_row_empty_field() {
    assert_eq!(domain_from_row(&row(&["a", "b", ""])), None);
    assert_eq!(domain_from_row(&row(&["a", "b", "   "])), None);
}

// --- build_report ---

#[test]
fn test_build_report_sorted_bytewise() {
    let mut counts = DomainCounts::new();
    counts.insert("zeta.io".to_string(), 1);
    counts.insert("alpha.com".to_string(), 3);
    counts.insert("a-b.com".to_string(), 2);
    counts.insert("a.com".to_string(), 5);

    let report = build_report(counts);
    let domains: Vec<&str> = report.iter().map(|r| r.domain.as_str()).collect();
    // '-' (0x2d) sorts before '.' (0x2e)
    assert_eq!(domains, vec!["a-b.com", "a.com", "alpha.com", "zeta.io"]);
    assert_eq!(report[1].customer_quantity, 5);
}

#[test]
fn test_build_report_empty() {
    assert!(build_report(DomainCounts::new()).is_empty());
}

// --- write_report ---

#[test]
fn test_write_report_text() {
    let report = vec![
        DomainCount {
            domain: "a.com".to_string(),
            customer_quantity: 2,
        },
        DomainCount {
            domain: "b.org".to_string(),
            customer_quantity: 1,
        },
    ];
    let mut out = Vec::new();
    write_report(&mut out, &report, OutputFormat::Text).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a.com\t2\nb.org\t1\n");
}

#[test]
fn test_write_report_json() {
    let report = vec![DomainCount {
        domain: "y.com".to_string(),
        customer_quantity: 2,
    }];
    let mut out = Vec::new();
    write_report(&mut out, &report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "domain": "y.com", "customer_quantity": 2 }])
    );
}

// --- PipelineTuning ---

#[test]
fn test_tuning_defaults() {
    let tuning = PipelineTuning::from_opts(&TallyOpts::default()).unwrap();
    assert_eq!(tuning.num_workers, 8);
    assert_eq!(tuning.queue_capacity, 1000);
}

#[test]
fn test_tuning_rejects_zero() {
    let zero_workers = TallyOpts {
        num_workers: Some(0),
        ..Default::default()
    };
    assert!(PipelineTuning::from_opts(&zero_workers).is_err());

    let zero_capacity = TallyOpts {
        queue_capacity: Some(0),
        ..Default::default()
    };
    assert!(PipelineTuning::from_opts(&zero_capacity).is_err());
}

// --- settings file ---

#[test]
fn test_settings_file_applies_present_fields() {
    let file = parse_settings(
        r#"
        [settings]
        workers = 4
        format = "json"
        "#,
    )
    .unwrap();
    let mut opts = Opts {
        queue_capacity: Some(64),
        ..Default::default()
    };
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.num_workers, Some(4));
    assert_eq!(opts.queue_capacity, Some(64));
    assert_eq!(opts.format, OutputFormat::Json);
    assert!(!opts.verbose);
}

#[test]
fn test_settings_file_empty_is_ok() {
    let file = parse_settings("").unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.num_workers, None);
    assert_eq!(opts.format, OutputFormat::Text);
}

#[test]
fn test_settings_file_unknown_key_rejected() {
    assert!(parse_settings("[settings]\nthreads = 3\n").is_err());
}

// --- module_label ---

#[test]
fn test_module_label_strips_crate_prefix() {
    assert_eq!(
        module_label("domaincount::pipeline::orchestrator"),
        "pipeline::orchestrator"
    );
    assert_eq!(module_label("domaincount"), "domaincount");
    assert_eq!(module_label("crossbeam_channel::flavors"), "crossbeam_channel::flavors");
}
