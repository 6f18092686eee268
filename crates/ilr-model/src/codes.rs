//! Fixed code sets used across rules and derived data.
//!
//! Every set is an immutable literal; nothing here changes at runtime.

pub mod fund_model {
    pub const COMMUNITY_LEARNING: i32 = 10;
    pub const AGE_16_TO_19: i32 = 25;
    pub const ADULT_SKILLS: i32 = 35;
    pub const APPRENTICESHIPS: i32 = 36;
    pub const EUROPEAN_SOCIAL_FUND: i32 = 70;
    pub const OTHER_ADULT: i32 = 81;
    pub const OTHER_16_TO_19: i32 = 82;
    pub const NOT_FUNDED_BY_ESFA: i32 = 99;

    /// Fund models eligible for adult-skills treatment.
    pub const ADULT_SKILLS_ELIGIBLE: &[i32] = &[ADULT_SKILLS];
}

pub mod prog_type {
    pub const ADVANCED_LEVEL_APPRENTICESHIP: i32 = 2;
    pub const INTERMEDIATE_LEVEL_APPRENTICESHIP: i32 = 3;
    pub const HIGHER_APPRENTICESHIP_LEVEL_4: i32 = 20;
    pub const HIGHER_APPRENTICESHIP_LEVEL_5: i32 = 21;
    pub const HIGHER_APPRENTICESHIP_LEVEL_6: i32 = 22;
    pub const HIGHER_APPRENTICESHIP_LEVEL_7_PLUS: i32 = 23;
    pub const TRAINEESHIP: i32 = 24;
    pub const APPRENTICESHIP_STANDARD: i32 = 25;

    pub const APPRENTICESHIPS: &[i32] = &[
        ADVANCED_LEVEL_APPRENTICESHIP,
        INTERMEDIATE_LEVEL_APPRENTICESHIP,
        HIGHER_APPRENTICESHIP_LEVEL_4,
        HIGHER_APPRENTICESHIP_LEVEL_5,
        HIGHER_APPRENTICESHIP_LEVEL_6,
        HIGHER_APPRENTICESHIP_LEVEL_7_PLUS,
        APPRENTICESHIP_STANDARD,
    ];
}

pub mod aim_type {
    pub const PROGRAMME_AIM: i32 = 1;
    pub const COMPONENT_AIM_IN_A_PROGRAMME: i32 = 3;
    pub const AIM_NOT_PART_OF_A_PROGRAMME: i32 = 4;
    pub const CORE_AIM_16_TO_19_EXCLUDING_APPRENTICESHIPS: i32 = 5;
}

pub mod comp_status {
    pub const CONTINUING: i32 = 1;
    pub const COMPLETED: i32 = 2;
    pub const WITHDRAWN: i32 = 3;
    pub const BREAK_IN_LEARNING: i32 = 6;
}

pub mod emp_stat {
    pub const IN_PAID_EMPLOYMENT: i32 = 10;
    pub const NOT_EMPLOYED_SEEKING_AND_AVAILABLE: i32 = 11;
    pub const NOT_EMPLOYED_NOT_SEEKING_OR_NOT_AVAILABLE: i32 = 12;
    pub const NOT_KNOWN_PROVIDED: i32 = 98;

    pub const NOT_EMPLOYED: &[i32] = &[
        NOT_EMPLOYED_SEEKING_AND_AVAILABLE,
        NOT_EMPLOYED_NOT_SEEKING_OR_NOT_AVAILABLE,
    ];
}

/// Learning delivery FAM types and combined `type + code` monitoring tokens.
pub mod fam {
    pub const ACT: &str = "ACT";
    pub const ADL: &str = "ADL";
    pub const FFI: &str = "FFI";
    pub const LDM: &str = "LDM";
    pub const RES: &str = "RES";
    pub const SOF: &str = "SOF";

    pub const FFI_FULLY_FUNDED: &str = "1";
    pub const FFI_CO_FUNDED: &str = "2";

    pub const ACT_EMPLOYER_LEVY: &str = "1";
    pub const ACT_ESFA_NON_LEVY: &str = "2";

    /// Learner in custody (OLASS).
    pub const LDM_OLASS: &str = "LDM034";
    /// Combined tokens qualifying a delivery for the unemployed-benefits
    /// derivation.
    pub const QUALIFYING_LEARNING_MONITORING: &[&str] = &["LDM318", "LDM328"];
}

/// Employment status monitoring types and codes.
pub mod esm {
    pub const BSI: &str = "BSI";
    pub const EII: &str = "EII";
    pub const LOU: &str = "LOU";
    pub const SEM: &str = "SEM";

    pub const BSI_JOBSEEKERS_ALLOWANCE: i32 = 1;
    pub const BSI_EMPLOYMENT_AND_SUPPORT_ALLOWANCE: i32 = 2;
    pub const BSI_OTHER_STATE_BENEFIT: i32 = 3;
    pub const BSI_UNIVERSAL_CREDIT: i32 = 4;

    /// Benefit-receipt codes counted as "other state benefits".
    pub const OTHER_STATE_BENEFITS: &[i32] = &[BSI_OTHER_STATE_BENEFIT, BSI_UNIVERSAL_CREDIT];
    /// Benefit-receipt codes placing an adult learner in the unemployed category.
    pub const UNEMPLOYMENT_BENEFITS: &[i32] = &[
        BSI_JOBSEEKERS_ALLOWANCE,
        BSI_EMPLOYMENT_AND_SUPPORT_ALLOWANCE,
    ];
}

/// LARS validity categories.
pub mod validity_category {
    pub const ANY: &str = "ANY";
    pub const ADULT_SKILLS: &str = "ADULT_SKILLS";
    pub const APPRENTICESHIPS: &str = "APPRENTICESHIPS";
    pub const COMMUNITY_LEARNING: &str = "COMM_LEARN";
    pub const EFA_16_TO_19: &str = "1619_EFA";
    pub const ESF: &str = "ESF";
    pub const LOANS: &str = "LOANS";
    pub const OLASS_ADULT: &str = "OLASS_ADULT";
    pub const UNEMPLOYED: &str = "UNEMPLOYED";
    pub const TRAINEESHIPS_16_TO_19: &str = "16-19_TRAINEESHIPS";
    pub const TRAINEESHIPS_19_TO_24: &str = "19-24_TRAINEESHIPS";
}

/// LARS learning delivery category references.
pub mod lars_category {
    pub const OLASS_OFFENDERS_IN_CUSTODY: i32 = 19;
}

/// LARS annual value basic skills types counted as English or maths.
pub mod basic_skills {
    pub const ENGLISH_AND_MATHS: &[i32] = &[
        1, 2, 11, 13, 14, 15, 19, 20, 21, 23, 24, 25, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38,
        39, 40, 41, 42,
    ];
}

/// Work experience aims recognised for traineeships.
pub mod aim_ref {
    pub const WORK_EXPERIENCE: &[&str] = &[
        "Z0007834", "Z0007835", "Z0007836", "Z0007837", "Z0007838", "ZWRKX001", "ZWRKX002",
    ];
}

pub mod funding_stream_period {
    pub const ESF_2014_TO_2020: &str = "ESF1420";
}

pub mod legal_org_type {
    pub const SPECIALIST_DESIGNATED_COLLEGE: &str = "USDC";
}

pub mod app_fin {
    pub const TOTAL_NEGOTIATED_PRICE: &str = "TNP";
    pub const PAYMENT_RECORD: &str = "PMR";
}

pub mod outcome_type {
    pub const EDUCATION: &str = "EDU";
    pub const EMPLOYMENT: &str = "EMP";
    pub const GAP_YEAR: &str = "GAP";
    pub const NOT_IN_EDUCATION_OR_TRAINING: &str = "NPE";
    pub const OTHER: &str = "OTH";
    pub const SOCIAL_DESTINATION: &str = "SDE";
    pub const VOLUNTARY_WORK: &str = "VOL";

    /// Outcomes counting as positive progression.
    pub const PROGRESSION: &[&str] = &[EDUCATION, EMPLOYMENT];
}
