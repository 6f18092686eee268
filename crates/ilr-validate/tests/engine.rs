//! Tests for the validation engine over whole messages.

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::{
    DpOutcome, Header, IlrError, LarsValidity, Learner, LearnerDestinationAndProgression,
    LearnerEmploymentStatus, LearningDelivery, LearningDeliveryFam, Message, OnsPostcode,
};
use ilr_reference::{FileData, ReferenceData, ReferenceDataSet};
use ilr_validate::{
    ReferenceServices, RuleSet, ValidationEngine, ValidationErrorCollector, ValidationOptions,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open_validity(learn_aim_ref: &str, category: &str) -> LarsValidity {
    LarsValidity {
        learn_aim_ref: learn_aim_ref.to_string(),
        validity_category: category.to_string(),
        start_date: date(2015, 8, 1),
        end_date: None,
        last_new_start_date: None,
    }
}

fn services() -> ReferenceServices {
    let data = ReferenceData::new(ReferenceDataSet {
        lars_validities: vec![
            open_validity("60133533", "ADULT_SKILLS"),
            open_validity("ZPROG001", "APPRENTICESHIPS"),
        ],
        ons_postcodes: vec![OnsPostcode {
            postcode: "CV1 2WT".to_string(),
            local_authority: "E08000026".to_string(),
            effective_from: date(2000, 1, 1),
            effective_to: None,
            termination: None,
        }],
        ..ReferenceDataSet::default()
    });
    ReferenceServices::from_reference_data(Arc::new(data), FileData::new(10000001, date(2019, 3, 1)))
}

fn header() -> Header {
    Header {
        ukprn: 10000001,
        file_preparation_date: date(2019, 3, 1),
    }
}

/// Adult skills learner that passes every rule.
fn clean_learner(learn_ref: &str) -> Learner {
    let mut delivery = LearningDelivery::new(1, "60133533", 35, date(2018, 9, 1));
    delivery.learn_plan_end_date = Some(date(2019, 6, 30));
    delivery.del_loc_post_code = Some("CV1 2WT".to_string());
    let mut learner = Learner::new(learn_ref);
    learner.date_of_birth = Some(date(1990, 1, 1));
    learner
        .learner_employment_statuses
        .push(LearnerEmploymentStatus::new(10, date(2018, 8, 1)));
    learner.learning_deliveries.push(delivery);
    learner
}

fn apprentice_with_act_gap(learn_ref: &str) -> Learner {
    let mut delivery = LearningDelivery::new(1, "ZPROG001", 36, date(2018, 6, 1));
    delivery.aim_type = 1;
    delivery.prog_type = Some(2);
    delivery.learning_delivery_fams = vec![
        LearningDeliveryFam::new("ACT", "1").with_dates(Some(date(2018, 6, 1)), Some(date(2018, 7, 1))),
        LearningDeliveryFam::new("ACT", "2").with_dates(Some(date(2018, 7, 3)), None),
    ];
    let mut learner = Learner::new(learn_ref);
    learner.learning_deliveries.push(delivery);
    learner
}

#[test]
fn clean_message_produces_clean_report() {
    let engine = ValidationEngine::new(&services(), ValidationOptions::default()).unwrap();
    let message = Message::new(header(), vec![clean_learner("L001"), clean_learner("L002")]);

    let report = engine.validate(&message);

    assert!(report.is_clean(), "{:?}", report.errors);
    assert_eq!(report.learners_validated, 2);
    assert_eq!(report.rules_evaluated, 21);
}

#[test]
fn act_gap_raises_one_contiguity_error() {
    let engine = ValidationEngine::new(&services(), ValidationOptions::default()).unwrap();
    let message = Message::new(header(), vec![apprentice_with_act_gap("APP01")]);

    let report = engine.validate(&message);
    let errors: Vec<_> = report.errors_for_rule("LearnDelFAMDateFrom_04").collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].learn_ref_number.as_deref(), Some("APP01"));
    assert_eq!(errors[0].aim_sequence_number, Some(1));
}

#[test]
fn message_rules_run_after_learners() {
    let engine = ValidationEngine::new(&services(), ValidationOptions::default()).unwrap();
    let mut message = Message::new(
        header(),
        vec![clean_learner("L001"), clean_learner("l001")],
    );
    message
        .learner_destination_and_progressions
        .push(LearnerDestinationAndProgression {
            learn_ref_number: "GONE99".to_string(),
            uln: 9999999999,
            dp_outcomes: vec![DpOutcome::new("EMP", 1, date(2019, 1, 1))],
        });

    let report = engine.validate(&message);
    let rules: Vec<_> = report.errors.iter().map(|e| e.rule_name.as_str()).collect();

    assert_eq!(rules, vec!["LearnRefNumber_04", "R106"]);
    assert_eq!(report.counts_by_learner().get("GONE99"), Some(&1));
}

#[test]
fn disabled_rules_are_skipped() {
    let options = ValidationOptions::default().with_disabled_rule("learndelfamdatefrom_04");
    let engine = ValidationEngine::new(&services(), options).unwrap();
    let message = Message::new(header(), vec![apprentice_with_act_gap("APP01")]);

    assert_eq!(engine.rules().len(), 20);
    assert!(engine
        .validate(&message)
        .errors_for_rule("LearnDelFAMDateFrom_04")
        .next()
        .is_none());
}

#[test]
fn zero_worker_threads_are_rejected() {
    let options = ValidationOptions {
        worker_threads: Some(0),
        ..ValidationOptions::default()
    };
    let result = ValidationEngine::new(&services(), options);
    assert!(matches!(result, Err(IlrError::InvalidConfiguration(_))));
}

#[test]
fn missing_collaborator_is_reported() {
    let result = ReferenceServices::builder()
        .with_lars(Arc::new(ReferenceData::default()))
        .build();
    assert!(matches!(result, Err(IlrError::MissingService(_))));
}

#[test]
fn external_handler_receives_every_error() {
    let engine = ValidationEngine::new(&services(), ValidationOptions::default()).unwrap();
    let message = Message::new(
        header(),
        vec![apprentice_with_act_gap("B2"), apprentice_with_act_gap("A1")],
    );

    let collector = ValidationErrorCollector::new();
    engine.validate_with_handler(&message, &collector);
    let errors = collector.into_errors();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].learn_ref_number.as_deref(), Some("A1"));
}

#[test]
fn empty_rule_set_reports_nothing() {
    let derived = ilr_derived::DerivedData::builder()
        .with_lars(Arc::new(ReferenceData::default()))
        .build()
        .unwrap();
    let engine =
        ValidationEngine::with_rules(RuleSet::new(), derived, ValidationOptions::default()).unwrap();
    let message = Message::new(header(), vec![apprentice_with_act_gap("A1")]);

    assert!(engine.validate(&message).is_clean());
}

#[test]
fn summary_lists_rules_alphabetically() {
    let engine = ValidationEngine::new(&services(), ValidationOptions::default()).unwrap();
    let mut unemployed = clean_learner("L003");
    unemployed.learner_employment_statuses.clear();
    unemployed.learning_deliveries[0].learn_act_end_date = Some(date(2018, 8, 1));
    let message = Message::new(
        header(),
        vec![apprentice_with_act_gap("APP01"), unemployed],
    );

    let report = engine.validate(&message);

    insta::assert_snapshot!(report.summary_lines().join("\n"), @r"
    2 learners, 21 rules, 3 errors
      EmpStat_01              1
      LearnActEndDate_01      1
      LearnDelFAMDateFrom_04  1
    ");
}
