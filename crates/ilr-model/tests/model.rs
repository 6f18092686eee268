//! Tests for ilr-model types.

use chrono::NaiveDate;
use ilr_model::{
    ErrorMessageParameter, Header, Learner, LearnerDestinationAndProgression, Message,
    ParameterValue, ValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn learner_deserializes_with_null_collections() {
    let json = r#"{
        "LearnRefNumber": "00001",
        "ULN": 1234567890,
        "DateOfBirth": "2001-02-03",
        "LearnerEmploymentStatus": null,
        "LearningDelivery": [
            {
                "LearnAimRef": "60133533",
                "AimType": 4,
                "AimSeqNumber": 1,
                "LearnStartDate": "2019-08-01",
                "FundModel": 35,
                "CompStatus": 1,
                "LearningDeliveryFAM": null
            }
        ]
    }"#;

    let learner: Learner = serde_json::from_str(json).expect("deserialize learner");

    assert_eq!(learner.learn_ref_number, "00001");
    assert_eq!(learner.date_of_birth, Some(date(2001, 2, 3)));
    assert!(learner.learner_employment_statuses.is_empty());
    assert!(learner.learner_fams.is_empty());

    let delivery = learner.delivery(1).expect("delivery 1");
    assert_eq!(delivery.fund_model, 35);
    assert_eq!(delivery.prog_type, None);
    assert!(delivery.learning_delivery_fams.is_empty());
    assert!(learner.delivery(2).is_none());
}

#[test]
fn fam_windows_deserialize() {
    let json = r#"{
        "LearnAimRef": "ZPROG001",
        "AimType": 1,
        "AimSeqNumber": 1,
        "LearnStartDate": "2018-01-01",
        "FundModel": 36,
        "ProgType": 25,
        "StdCode": 17,
        "CompStatus": 1,
        "LearningDeliveryFAM": [
            {"LearnDelFAMType": "ACT", "LearnDelFAMCode": "1",
             "LearnDelFAMDateFrom": "2018-01-01", "LearnDelFAMDateTo": "2018-06-30"}
        ]
    }"#;

    let delivery: ilr_model::LearningDelivery =
        serde_json::from_str(json).expect("deserialize delivery");
    let fam = &delivery.learning_delivery_fams[0];

    assert_eq!(fam.learn_del_fam_type, "ACT");
    assert_eq!(fam.learn_del_fam_date_from, Some(date(2018, 1, 1)));
    assert_eq!(fam.learn_del_fam_date_to, Some(date(2018, 6, 30)));
}

#[test]
fn destinations_match_reference_case_insensitively() {
    let mut message = Message::new(
        Header {
            ukprn: 10000001,
            file_preparation_date: date(2019, 10, 1),
        },
        vec![Learner::new("abc01")],
    );
    message
        .learner_destination_and_progressions
        .push(LearnerDestinationAndProgression {
            learn_ref_number: "ABC01 ".to_string(),
            uln: 1,
            dp_outcomes: vec![],
        });

    assert_eq!(message.destinations_for("abc01").count(), 1);
    assert_eq!(message.destinations_for("abc02").count(), 0);
}

#[test]
fn validation_error_parameter_lookup() {
    let error = ValidationError {
        rule_name: "AchDate_05".to_string(),
        learn_ref_number: Some("00001".to_string()),
        aim_sequence_number: Some(1),
        parameters: vec![
            ErrorMessageParameter::new("FundModel", 35),
            ErrorMessageParameter::new("AchDate", date(2019, 1, 31)),
        ],
    };

    assert_eq!(error.parameter("FundModel"), Some(&ParameterValue::Integer(35)));
    assert_eq!(
        error.parameter("AchDate").map(ToString::to_string),
        Some("31/01/2019".to_string())
    );
    assert!(error.parameter("Missing").is_none());
}
