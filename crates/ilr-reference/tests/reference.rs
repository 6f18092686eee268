//! Tests for the in-memory reference collaborators.

use chrono::NaiveDate;
use ilr_model::{
    FcsContractAllocation, LarsAnnualValue, LarsLearningDeliveryCategory, LarsValidity,
    OnsPostcode, Organisation,
};
use ilr_reference::{
    FcsDataService, LarsDataService, OrganisationDataService, PostcodesDataService, ReferenceData,
    ReferenceDataSet,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn allocation(number: &str, start: NaiveDate, stop: Option<NaiveDate>) -> FcsContractAllocation {
    FcsContractAllocation {
        contract_allocation_number: number.to_string(),
        funding_stream_period_code: "ESF1420".to_string(),
        ukprn: 10000001,
        start_date: start,
        end_date: None,
        stop_new_starts_from_date: stop,
    }
}

fn reference_data() -> ReferenceData {
    ReferenceData::new(ReferenceDataSet {
        lars_validities: vec![
            LarsValidity {
                learn_aim_ref: "60133533".to_string(),
                validity_category: "ADULT_SKILLS".to_string(),
                start_date: date(2015, 8, 1),
                end_date: Some(date(2018, 7, 31)),
                last_new_start_date: None,
            },
            LarsValidity {
                learn_aim_ref: "60133533".to_string(),
                validity_category: "ADULT_SKILLS".to_string(),
                start_date: date(2018, 8, 1),
                end_date: None,
                last_new_start_date: Some(date(2020, 7, 31)),
            },
        ],
        lars_categories: vec![LarsLearningDeliveryCategory {
            learn_aim_ref: "60133533".to_string(),
            category_ref: 19,
            effective_from: date(2016, 1, 1),
            effective_to: Some(date(2016, 12, 31)),
        }],
        lars_annual_values: vec![
            LarsAnnualValue {
                learn_aim_ref: "ZESF0001".to_string(),
                basic_skills_type: Some(1),
                effective_from: date(2015, 8, 1),
                effective_to: None,
            },
            LarsAnnualValue {
                learn_aim_ref: "ZESF0001".to_string(),
                basic_skills_type: None,
                effective_from: date(2017, 8, 1),
                effective_to: None,
            },
        ],
        fcs_contract_allocations: vec![
            allocation("ESF-0001", date(2019, 4, 1), Some(date(2019, 12, 31))),
            allocation("ESF-0001", date(2020, 4, 1), None),
        ],
        ons_postcodes: vec![OnsPostcode {
            postcode: "CV1 2WT".to_string(),
            local_authority: "E08000026".to_string(),
            effective_from: date(2010, 1, 1),
            effective_to: None,
            termination: Some(date(2019, 1, 1)),
        }],
        organisations: vec![Organisation {
            ukprn: 10000001,
            legal_org_type: "USDC".to_string(),
        }],
        ..ReferenceDataSet::default()
    })
}

#[test]
fn validity_selects_window_for_category() {
    let data = reference_data();

    let earlier = data.validity_for("60133533", "adult_skills", date(2017, 1, 1));
    assert_eq!(earlier.map(|v| v.start_date), Some(date(2015, 8, 1)));

    let later = data.validity_for("60133533", "ADULT_SKILLS", date(2020, 7, 31));
    assert_eq!(later.map(|v| v.start_date), Some(date(2018, 8, 1)));

    assert!(data.validity_for("60133533", "ADULT_SKILLS", date(2020, 8, 1)).is_none());
    assert!(data.validity_for("60133533", "APPRENTICESHIPS", date(2017, 1, 1)).is_none());
    assert!(data.validity_for("UNKNOWN1", "ADULT_SKILLS", date(2017, 1, 1)).is_none());
}

#[test]
fn category_window_is_inclusive() {
    let data = reference_data();
    assert!(data.has_category_on("60133533", 19, date(2016, 12, 31)));
    assert!(!data.has_category_on("60133533", 19, date(2017, 1, 1)));
    assert!(!data.has_category_on("60133533", 20, date(2016, 6, 1)));
}

#[test]
fn basic_skills_type_comes_from_latest_applicable_value() {
    let data = reference_data();
    assert_eq!(data.basic_skills_type_for("ZESF0001", date(2016, 1, 1)), Some(1));
    assert_eq!(data.basic_skills_type_for("ZESF0001", date(2018, 9, 1)), None);
    assert_eq!(data.basic_skills_type_for("ZESF0001", date(2015, 1, 1)), None);
}

#[test]
fn allocation_stop_date_refuses_starts_on_that_day() {
    let data = reference_data();

    let before_stop = data.contract_allocation_for(10000001, "esf-0001", "ESF1420", date(2019, 12, 30));
    assert_eq!(before_stop.map(|a| a.start_date), Some(date(2019, 4, 1)));

    assert!(data
        .contract_allocation_for(10000001, "ESF-0001", "ESF1420", date(2019, 12, 31))
        .is_none());
    assert!(data
        .contract_allocation_for(10000001, "ESF-0001", "ESF1420", date(2020, 1, 15))
        .is_none());

    let open = data.contract_allocation_for(10000001, "ESF-0001", "ESF1420", date(2021, 1, 1));
    assert_eq!(open.map(|a| a.stop_new_starts_from_date), Some(None));

    assert!(data.contract_allocations(99999999).is_empty());
}

#[test]
fn postcode_termination_is_exclusive() {
    let data = reference_data();
    assert!(data.is_valid_postcode("cv1 2wt"));
    assert!(data.is_current_on("CV1 2WT", date(2018, 12, 31)));
    assert!(!data.is_current_on("CV1 2WT", date(2019, 1, 1)));
    assert!(!data.is_valid_postcode("ZZ9 9ZZ"));
}

#[test]
fn organisation_legal_type() {
    let data = reference_data();
    assert!(data.legal_org_type_matches(10000001, "usdc"));
    assert!(!data.legal_org_type_matches(10000001, "PSF"));
    assert!(!data.legal_org_type_matches(10000002, "USDC"));
}

#[test]
fn reference_set_deserializes_from_json() {
    let json = r#"{
        "LarsValidities": [
            {"LearnAimRef": "60133533", "ValidityCategory": "ANY", "StartDate": "2015-08-01"}
        ],
        "Organisations": [{"UKPRN": 10000001, "LegalOrgType": "PLBG"}]
    }"#;

    let data = ReferenceData::from_reader(json.as_bytes()).expect("load reference data");

    assert!(data.validity_for("60133533", "ANY", date(2030, 1, 1)).is_some());
    assert!(data.legal_org_type_matches(10000001, "PLBG"));
    assert!(data.ons_postcodes("CV1 2WT").is_empty());
}
