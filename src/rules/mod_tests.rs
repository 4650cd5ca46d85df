use super::*;
use crate::config::RuleConfig;

#[test]
fn default_config_enables_every_rule_in_order() {
    let rules = RuleSet::from_config(&Config::default()).unwrap();
    assert_eq!(rules.names().collect::<Vec<_>>(), RULE_NAMES);
    assert!(rules.iter().all(|(_, severity)| severity == Severity::Error));
}

#[test]
fn disabled_rules_are_skipped() {
    let mut config = Config::default();
    config.rules.insert(
        "model-no-self-mock".to_string(),
        RuleConfig {
            enabled: false,
            severity: None,
        },
    );
    let rules = RuleSet::from_config(&config).unwrap();
    assert_eq!(rules.len(), RULE_NAMES.len() - 1);
    assert!(!rules.names().any(|n| n == "model-no-self-mock"));
}

#[test]
fn severity_override_applies() {
    let mut config = Config::default();
    config.rules.insert(
        "method-describe-naming".to_string(),
        RuleConfig {
            enabled: true,
            severity: Some(Severity::Warning),
        },
    );
    let rules = RuleSet::from_config(&config).unwrap();
    let (_, severity) = rules
        .iter()
        .find(|(rule, _)| rule.name() == "method-describe-naming")
        .unwrap();
    assert_eq!(severity, Severity::Warning);
}

#[test]
fn selection_restricts_and_overrides_enabled() {
    let mut config = Config::default();
    config.rules.insert(
        "model-no-self-mock".to_string(),
        RuleConfig {
            enabled: false,
            severity: None,
        },
    );
    let selection = vec![
        "model-no-self-mock".to_string(),
        "one-expectation-per-example".to_string(),
    ];
    let rules = RuleSet::build(&config, &selection).unwrap();
    assert_eq!(
        rules.names().collect::<Vec<_>>(),
        vec!["one-expectation-per-example", "model-no-self-mock"]
    );
}

#[test]
fn unknown_selection_is_rejected() {
    let result = RuleSet::build(&Config::default(), &["no-such-rule".to_string()]);
    assert!(matches!(result, Err(SpecGuardError::UnknownRule(name)) if name == "no-such-rule"));
}

#[test]
fn invalid_method_pattern_fails_build() {
    let mut config = Config::default();
    config.naming.method_pattern = "(".to_string();
    assert!(RuleSet::from_config(&config).is_err());
}

#[test]
fn catalog_brackets_rules_with_pseudo_rules() {
    let rules = RuleSet::from_config(&Config::default()).unwrap();
    let catalog = rules.catalog();
    assert_eq!(catalog.len(), RULE_NAMES.len() + 2);
    assert_eq!(catalog[0].name, PARSE_WARNING);
    assert_eq!(catalog[0].severity, Severity::Warning);
    assert_eq!(catalog.last().unwrap().name, INTERNAL_RULE_ERROR);
}
