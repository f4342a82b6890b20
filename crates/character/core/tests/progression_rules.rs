use character_core::{
    Attribute, Character, Die, Edge, EdgeCategory, ErrorSeverity, ExecuteError, Hindrance,
    PrerequisiteFailure, ProgressionConfig, ProgressionEngine, RuleError, SkillDefinition,
    SkillError, SkillRefundPolicy, TransitionPhase,
};
use strum::IntoEnumIterator;

fn fresh(config: &ProgressionConfig) -> Character {
    Character::new("Red", config)
}

// ============================================================================
// Attribute ledger
// ============================================================================

#[test]
fn attribute_spend_and_refund_are_symmetric() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = fresh(&config);

    let raised = engine
        .set_attribute(&hero, Attribute::Strength, Die::D8)
        .expect("two steps are affordable");
    assert_eq!(raised.points.attribute_points, 3);
    assert_eq!(raised.attributes.strength, Die::D8);

    let lowered = engine
        .set_attribute(&raised, Attribute::Strength, Die::D4)
        .expect("refunds are always affordable");
    assert_eq!(lowered.points.attribute_points, hero.points.attribute_points);
    assert_eq!(lowered, hero);
}

#[test]
fn attribute_overspend_is_rejected_with_reason() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);
    hero.points.attribute_points = 2;

    let err = engine
        .set_attribute(&hero, Attribute::Agility, Die::D10)
        .unwrap_err();

    assert_eq!(err.error_code(), "ATTRIBUTE_INSUFFICIENT_POINTS");
    assert_eq!(err.phase(), TransitionPhase::PreValidate);
    assert_eq!(err.severity(), ErrorSeverity::Recoverable);
}

#[test]
fn raise_and_lower_walk_the_die_table() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = fresh(&config);

    let up = engine.raise_attribute(&hero, Attribute::Spirit).unwrap();
    assert_eq!(up.attributes.spirit, Die::D6);
    assert_eq!(up.points.attribute_points, 4);

    let err = engine.lower_attribute(&hero, Attribute::Spirit).unwrap_err();
    assert_eq!(err.error_code(), "ATTRIBUTE_AT_MINIMUM");
}

#[test]
fn attribute_pool_never_goes_negative() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);

    // Try every target die on every attribute, carrying accepted results forward.
    let mut hero = fresh(&config);
    for attribute in Attribute::iter() {
        for die in Die::iter().rev() {
            if let Ok(next) = engine.set_attribute(&hero, attribute, die) {
                hero = next;
            }
            assert!(hero.points.attribute_points >= 0);
        }
    }
}

// ============================================================================
// Skill ledger
// ============================================================================

#[test]
fn skill_costs_one_when_linked_attribute_is_above_d4() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);
    hero.attributes.smarts = Die::D8;

    let research = SkillDefinition::new("Research", Attribute::Smarts);
    let learned = engine.add_skill(&hero, &research).unwrap();

    assert_eq!(learned.points.skill_points, hero.points.skill_points - 1);
    let skill = learned.skill("Research").expect("skill was appended");
    assert_eq!(skill.die, Die::D4);
    assert_eq!(skill.acquisition_cost, 1);
}

#[test]
fn skill_costs_two_when_linked_attribute_is_d4() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = fresh(&config);

    let stealth = SkillDefinition::new("Stealth", Attribute::Agility);
    let learned = engine.add_skill(&hero, &stealth).unwrap();
    assert_eq!(learned.points.skill_points, hero.points.skill_points - 2);
}

#[test]
fn skill_suggested_die_is_ignored() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = fresh(&config);

    let mut fighting = SkillDefinition::new("Fighting", Attribute::Agility);
    fighting.suggested_die = Some(Die::D10);

    let learned = engine.add_skill(&hero, &fighting).unwrap();
    assert_eq!(learned.skill("Fighting").map(|s| s.die), Some(Die::MIN));
}

#[test]
fn skill_pool_exhaustion_is_rejected() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);
    hero.points.skill_points = 1;

    let err = engine
        .add_skill(&hero, &SkillDefinition::new("Notice", Attribute::Smarts))
        .unwrap_err();
    assert_eq!(
        err,
        ExecuteError::AddSkill(character_core::TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            SkillError::InsufficientPoints {
                skill: "Notice".into(),
                cost: 2,
                available: 1,
            },
        ))
    );
}

#[test]
fn skill_refund_uses_acquisition_cost_by_default() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = engine
        .set_attribute(&fresh(&config), Attribute::Smarts, Die::D6)
        .unwrap();

    let research = SkillDefinition::new("Research", Attribute::Smarts);
    let learned = engine.add_skill(&hero, &research).unwrap();
    assert_eq!(learned.points.skill_points, 11);

    // Lowering Smarts afterwards must not change what removal gives back.
    let lowered = engine
        .set_attribute(&learned, Attribute::Smarts, Die::D4)
        .unwrap();
    let removed = engine.remove_skill(&lowered, &research).unwrap();

    assert_eq!(removed.points.skill_points, 12);
    assert!(!removed.has_skill("Research"));
}

#[test]
fn current_cost_refund_policy_reprices_removal() {
    let config = ProgressionConfig::default().with_refund_policy(SkillRefundPolicy::CurrentCost);
    let engine = ProgressionEngine::new(&config);
    let hero = engine
        .set_attribute(&fresh(&config), Attribute::Smarts, Die::D6)
        .unwrap();

    let research = SkillDefinition::new("Research", Attribute::Smarts);
    let learned = engine.add_skill(&hero, &research).unwrap();
    let lowered = engine
        .set_attribute(&learned, Attribute::Smarts, Die::D4)
        .unwrap();
    let removed = engine.remove_skill(&lowered, &research).unwrap();

    // Paid 1, refunded 2.
    assert_eq!(removed.points.skill_points, 13);
}

#[test]
fn skill_pool_never_goes_negative() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);

    for (index, attribute) in Attribute::iter().cycle().take(12).enumerate() {
        let definition = SkillDefinition::new(format!("Skill {index}"), attribute);
        if let Ok(next) = engine.add_skill(&hero, &definition) {
            hero = next;
        }
        assert!(hero.points.skill_points >= 0);
    }
    assert_eq!(hero.skills.len(), 6);
    assert_eq!(hero.points.skill_points, 0);
}

// ============================================================================
// Hindrance ledger
// ============================================================================

#[test]
fn hindrance_cap_is_enforced_at_the_mutation() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = fresh(&config);

    let hero = engine
        .add_hindrance(&hero, &Hindrance::major("Loyal"))
        .unwrap();
    let hero = engine
        .add_hindrance(&hero, &Hindrance::minor("Curious"))
        .unwrap();
    assert_eq!(engine.hindrance_points_awarded(&hero), 3);
    assert_eq!(hero.points.hindrance_points, 3);

    assert!(!engine.is_valid_hindrance(&hero, &Hindrance::major("Wanted")));
    assert!(engine.is_valid_hindrance(&hero, &Hindrance::minor("Stubborn")));

    let err = engine
        .add_hindrance(&hero, &Hindrance::major("Wanted"))
        .unwrap_err();
    assert_eq!(err.error_code(), "HINDRANCE_CAP_EXCEEDED");

    let capped = engine
        .add_hindrance(&hero, &Hindrance::minor("Stubborn"))
        .unwrap();
    assert_eq!(engine.hindrance_points_awarded(&capped), 4);
}

#[test]
fn hindrance_round_trip_restores_character() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = fresh(&config);
    let vow = Hindrance::major("Vow");

    let taken = engine.add_hindrance(&hero, &vow).unwrap();
    let given_up = engine.remove_hindrance(&taken, &vow).unwrap();
    assert_eq!(given_up, hero);
}

#[test]
fn duplicate_hindrance_entries_are_removed_one_at_a_time() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let curious = Hindrance::minor("Curious");

    let hero = engine.add_hindrance(&fresh(&config), &curious).unwrap();
    let hero = engine.add_hindrance(&hero, &curious).unwrap();
    assert_eq!(hero.hindrances.len(), 2);
    assert_eq!(hero.points.hindrance_points, 2);

    let hero = engine.remove_hindrance(&hero, &curious).unwrap();
    assert_eq!(hero.hindrances, vec![curious.clone()]);
    assert_eq!(hero.points.hindrance_points, 1);
    assert_eq!(engine.hindrance_points_awarded(&hero), 1);
}

#[test]
fn hindrance_removal_cannot_strand_edge_spend() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let loyal = Hindrance::major("Loyal");

    let hero = engine.add_hindrance(&fresh(&config), &loyal).unwrap();
    let hero = engine
        .add_edge(&hero, &Edge::new("Luck", EdgeCategory::Background))
        .unwrap();
    assert_eq!(hero.points.hindrance_points, 0);

    let err = engine.remove_hindrance(&hero, &loyal).unwrap_err();
    assert_eq!(err.error_code(), "HINDRANCE_POINTS_COMMITTED");
}

// ============================================================================
// Edge validator & ledger
// ============================================================================

fn brawler() -> Edge {
    Edge::new("Brawler", EdgeCategory::Combat)
        .requires_attribute(Attribute::Strength, Die::D8)
        .requires_skill("Fighting", Die::D6)
}

#[test]
fn edge_failures_accumulate_one_reason_per_prerequisite() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);
    hero.attributes.strength = Die::D6;
    hero.points.hindrance_points = 2;

    let report = engine.validate_edge(&hero, &brawler());

    assert!(!report.is_valid());
    assert_eq!(
        report.failures,
        vec![
            PrerequisiteFailure::Attribute {
                attribute: Attribute::Strength,
                required: Die::D8,
                actual: Die::D6,
            },
            PrerequisiteFailure::Skill {
                name: "Fighting".into(),
                required: Die::D6,
                actual: None,
            },
        ]
    );
    assert_eq!(
        report.reasons(),
        vec![
            "Requires Strength to be at least d8, but is d6.".to_string(),
            "Requires Fighting to be at least d6, but is not present.".to_string(),
        ]
    );
}

#[test]
fn edge_without_points_lists_that_first() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let hero = fresh(&config);

    let report = engine.validate_edge(&hero, &brawler());
    assert_eq!(report.failures.len(), 3);
    assert!(matches!(
        report.failures[0],
        PrerequisiteFailure::HindrancePoints { required: 2, available: 0 }
    ));
}

#[test]
fn invalid_edge_is_rejected_by_add_edge() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);
    hero.points.hindrance_points = 2;

    let err = engine.add_edge(&hero, &brawler()).unwrap_err();
    match err {
        ExecuteError::AddEdge(phase_error) => {
            assert_eq!(phase_error.phase, TransitionPhase::PreValidate);
            assert_eq!(phase_error.error.error_code(), "EDGE_PREREQUISITES_NOT_MET");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn edge_round_trip_restores_pool_and_list() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);
    hero.attributes.strength = Die::D8;
    hero.points.hindrance_points = 4;
    hero.edges.push(Edge::new("Alertness", EdgeCategory::Background));
    let hero = engine
        .add_skill(&hero, &SkillDefinition::new("Fighting", Attribute::Agility))
        .unwrap();
    let mut hero = hero;
    hero.skills[0].die = Die::D6;

    let taken = engine.add_edge(&hero, &brawler()).unwrap();
    assert_eq!(taken.points.hindrance_points, 2);
    assert!(taken.has_edge("Brawler"));

    let given_up = engine.remove_edge(&taken, &brawler()).unwrap();
    assert_eq!(given_up.points.hindrance_points, hero.points.hindrance_points);
    assert_eq!(given_up.edges, hero.edges);
}

#[test]
fn removing_an_unheld_edge_is_rejected() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let err = engine.remove_edge(&fresh(&config), &brawler()).unwrap_err();
    assert_eq!(err.error_code(), "EDGE_NOT_HELD");
    assert_eq!(err.severity(), ErrorSeverity::Validation);
}

// ============================================================================
// Value semantics
// ============================================================================

#[test]
fn no_operation_changes_the_callers_character() {
    let config = ProgressionConfig::default();
    let engine = ProgressionEngine::new(&config);
    let mut hero = fresh(&config);
    hero.points.hindrance_points = 2;
    hero.hindrances.push(Hindrance::major("Loyal"));
    let snapshot = hero.clone();

    let research = SkillDefinition::new("Research", Attribute::Smarts);
    let luck = Edge::new("Luck", EdgeCategory::Background);

    let outcomes = [
        engine.set_attribute(&hero, Attribute::Smarts, Die::D8),
        engine.set_attribute(&hero, Attribute::Smarts, Die::D12),
        engine.add_skill(&hero, &research),
        engine.remove_skill(&hero, &research),
        engine.add_hindrance(&hero, &Hindrance::minor("Curious")),
        engine.add_hindrance(&hero, &Hindrance::major("Wanted")),
        engine.remove_hindrance(&hero, &Hindrance::major("Loyal")),
        engine.add_edge(&hero, &luck),
        engine.remove_edge(&hero, &luck),
    ];

    assert!(outcomes.iter().any(Result::is_ok));
    assert!(outcomes.iter().any(Result::is_err));
    assert_eq!(hero, snapshot);
}
