//! Property names used as error message parameter names.

pub const AIM_TYPE: &str = "AimType";
pub const ACH_DATE: &str = "AchDate";
pub const AFIN_TYPE: &str = "AFinType";
pub const COMP_STATUS: &str = "CompStatus";
pub const CON_REF_NUMBER: &str = "ConRefNumber";
pub const DATE_OF_BIRTH: &str = "DateOfBirth";
pub const DEL_LOC_POST_CODE: &str = "DelLocPostCode";
pub const FILE_PREPARATION_DATE: &str = "FilePreparationDate";
pub const FUND_MODEL: &str = "FundModel";
pub const LEARN_ACT_END_DATE: &str = "LearnActEndDate";
pub const LEARN_AIM_REF: &str = "LearnAimRef";
pub const LEARN_DEL_FAM_CODE: &str = "LearnDelFAMCode";
pub const LEARN_DEL_FAM_DATE_FROM: &str = "LearnDelFAMDateFrom";
pub const LEARN_DEL_FAM_DATE_TO: &str = "LearnDelFAMDateTo";
pub const LEARN_DEL_FAM_TYPE: &str = "LearnDelFAMType";
pub const LEARN_PLAN_END_DATE: &str = "LearnPlanEndDate";
pub const LEARN_REF_NUMBER: &str = "LearnRefNumber";
pub const LEARN_START_DATE: &str = "LearnStartDate";
pub const PROG_TYPE: &str = "ProgType";
pub const STD_CODE: &str = "StdCode";
pub const UKPRN: &str = "UKPRN";
