use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BvnInitiateResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: BvnSession,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BvnSession {
    /// Opaque session to thread into the verify and details calls through the
    /// `x-session-id` header.
    pub session_id: String,
    pub bvn: String,
    pub methods: Vec<BvnVerificationMethod>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BvnVerificationMethod {
    pub method: String,
    pub hint: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BvnVerifyResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BvnDetailsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: BvnDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BvnDetails {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub dob: String,
    pub phone_number: String,
    pub phone_number_2: Option<String>,
    pub email: String,
    pub gender: String,
    pub state_of_origin: String,
    pub bvn: String,
    pub nin: String,
    pub registration_date: String,
    pub lga_of_origin: String,
    #[serde(rename = "lga_of_Residence")]
    pub lga_of_residence: String,
    pub marital_status: String,
    pub watch_listed: bool,
    #[serde(rename = "photoId")]
    pub photo_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BusinessSearchResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<BusinessRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BusinessRecord {
    pub nature_of_business_name: Option<String>,
    pub classification_id: i64,
    pub delisting_status: Option<String>,
    pub company_type_name: Option<String>,
    pub active: bool,
    /// Registry id of the company, used for all company-scoped CAC calls.
    pub id: i64,
    pub classification: Option<String>,
    pub business_commencement_date: String,
    pub approved_name: String,
    pub branch_address: String,
    pub registration_approved: bool,
    pub head_office_address: Option<String>,
    pub objectives: Option<String>,
    pub registration_date: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub lga: String,
    pub rc_number: String,
    pub state: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ShareholdersResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<CompanyOfficer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DirectorsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<CompanyOfficer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SecretaryResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<CompanyOfficer>,
}

/// A person (or corporate body) attached to a registered company: a
/// shareholder, director or secretary. The registry returns the same record
/// shape for all three roles.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CompanyOfficer {
    pub id: i64,
    pub surname: String,
    pub firstname: String,
    pub other_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub former_nationality: String,
    pub age: i64,
    pub city: String,
    pub occupation: String,
    pub former_name: String,
    pub corporation_name: String,
    pub rc_number: String,
    pub corporation_company: Option<String>,
    pub state: String,
    pub pobox: Option<String>,
    pub accreditationnumber: String,
    pub is_lawyer: Option<bool>,
    pub last_visit: i64,
    pub form_type: String,
    pub is_presenter: Option<bool>,
    pub is_chairman: Option<bool>,
    pub num_shares_alloted: Option<i64>,
    pub type_of_shares: String,
    pub date_of_birth: Option<String>,
    pub status: String,
    pub date_of_termination: Option<String>,
    pub date_of_appointment: Option<String>,
    pub date_of_change_of_address: Option<String>,
    pub former_address: Option<String>,
    pub former_postal: Option<String>,
    pub former_surname: String,
    pub former_first_name: String,
    pub former_other_name: String,
    pub date_of_status_change: Option<String>,
    pub identity_number: String,
    pub identity_issue_state: Option<String>,
    pub other_directorship_details: Option<String>,
    pub portal_user_fk: Option<String>,
    pub affiliates_fk: Option<String>,
    pub process_type_fk: ProcessType,
    pub company: Option<String>,
    pub same_person_as_fk: Option<String>,
    pub nature_of_app_or_discharge: Option<String>,
    pub is_designated: Option<bool>,
    pub end_of_appointment: Option<String>,
    pub appointed_by: Option<String>,
    pub date_of_deed_of_discharge: Option<String>,
    pub date_of_resolution: Option<String>,
    pub country_fk: CountryRef,
    pub country_of_residence: Option<String>,
    pub is_carried_over_from_name_avai: Option<bool>,
    pub lga: Option<String>,
    pub corporation_registration_date: Option<String>,
    pub is_company_deleted: Option<bool>,
    pub government_organisation_name: Option<String>,
    pub foreign_organisation_name: Option<String>,
    pub company_street_address: Option<String>,
    pub company_state: Option<String>,
    pub company_city: Option<String>,
    pub is_corporate: Option<bool>,
    pub county_of_incorporation_fk: Option<String>,
    pub nationality: Option<String>,
    pub address: String,
    pub postcode: String,
    pub street_number: String,
    pub affiliates_residential_address: Option<serde_json::Value>,
    pub affiliates_psc_information: Option<i64>,
    pub legal_owners_of_interests: Vec<serde_json::Value>,
    pub legal_owners_of_voting_rights: Vec<serde_json::Value>,
    pub stock_exchange_soes: Vec<serde_json::Value>,
    pub approved_for_notice_of_psc: Option<String>,
    pub company_address2: String,
    pub full_address2: String,
    pub affiliate_type_fk: AffiliateType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ProcessType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub amount: i64,
    pub r#type: Option<String>,
    pub product_id: String,
    pub bank_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CountryRef {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AffiliateType {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PreviousAddressResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: PreviousAddress,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PreviousAddress {
    pub approved_name: String,
    pub previous_address: String,
    pub street_name: String,
    pub city: String,
    pub submission_date: String,
    pub approval_date: String,
    pub id: i64,
    pub state: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ChangeOfNameResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<NameChange>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct NameChange {
    pub persist_master_id: i64,
    pub new_name: String,
    pub former_name: String,
    pub approval_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct HomeAddressResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: HomeAddress,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct HomeAddress {
    pub verified: bool,
    pub house_address: String,
    pub house_owner: String,
    /// 0 or 1.
    pub confidence_level: u8,
    pub disco_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PassportResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: PassportRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PassportRecord {
    pub passport_number: String,
    pub issued_date: Option<String>,
    pub expiry_date: Option<String>,
    pub document_type: String,
    pub issued_at: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// `DD/MM/YYYY`.
    pub dob: String,
    pub gender: String,
    pub photo: Option<String>,
    pub signature: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TinResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: TinRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TinRecord {
    pub taxpayer_name: String,
    pub cac_reg_number: String,
    pub firstin: String,
    pub jittin: String,
    pub tax_office: String,
    pub phone_number: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct NinResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: NinRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct NinRecord {
    pub birthcountry: String,
    pub birthdate: String,
    pub birthlga: String,
    pub birthstate: String,
    pub educationallevel: String,
    pub email: String,
    pub employmentstatus: String,
    pub firstname: String,
    pub gender: String,
    pub height: String,
    pub maritalstatus: String,
    pub middlename: String,
    pub nin: String,
    pub nok_address1: String,
    pub nok_address2: String,
    pub nok_firstname: String,
    pub nok_lga: String,
    pub nok_middlename: String,
    pub nok_postalcode: String,
    pub nok_state: String,
    pub nok_surname: String,
    pub nok_town: String,
    pub spoken_language: String,
    pub photo: String,
    pub profession: String,
    pub religion: String,
    pub residence_address: String,
    pub residence_lga: String,
    pub residence_state: String,
    pub residence_town: String,
    pub residencestatus: String,
    pub self_origin_lga: String,
    pub self_origin_place: String,
    pub self_origin_state: String,
    pub signature: String,
    pub surname: String,
    pub telephoneno: String,
    pub title: String,
    pub userid: String,
    pub vnin: String,
    #[serde(rename = "central_iD")]
    pub central_id: String,
    pub tracking_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DriversLicenseResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: DriversLicense,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DriversLicense {
    pub gender: String,
    pub photo: String,
    pub license_no: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub issued_date: String,
    pub expiry_date: String,
    #[serde(rename = "state_ofIssue")]
    pub state_of_issue: String,
    pub birth_date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountNumberResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: AccountNumberRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountNumberRecord {
    pub name: String,
    pub account_number: String,
    pub bvn: String,
    pub bank: BankRef,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BankRef {
    pub name: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreditHistoryResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: CreditHistory,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreditHistory {
    pub providers: Vec<String>,
    pub profile: CreditProfile,
    pub credit_history: Vec<InstitutionCreditHistory>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreditProfile {
    pub full_name: String,
    /// `DD-MM-YYYY`.
    pub dob: String,
    pub address_history: Vec<AddressHistoryEntry>,
    pub email_addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub gender: String,
    pub identifications: Vec<IdentificationRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AddressHistoryEntry {
    pub address: String,
    pub r#type: String,
    pub date_reported: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct IdentificationRecord {
    pub r#type: String,
    pub no: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct InstitutionCreditHistory {
    pub institution: String,
    pub history: Vec<CreditFacility>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreditFacility {
    pub date_opened: String,
    pub opening_balance: i64,
    pub currency: String,
    pub performance_status: String,
    /// Loan tenor, in months.
    pub tenor: u32,
    pub closed_date: String,
    pub loan_status: String,
    pub repayment_frequency: String,
    pub repayment_amount: i64,
    pub repayment_schedule: Vec<RepaymentEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RepaymentEntry {
    /// `MM-YYYY`.
    pub date: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MashupResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Mashup,
}

/// Combined NIN + BVN identity record.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Mashup {
    pub personal_information: MashupPersonalInformation,
    pub identification_numbers: MashupIdentifiers,
    pub residence_information: MashupResidence,
    pub biometrics: MashupBiometrics,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MashupPersonalInformation {
    pub title: String,
    pub first_name: String,
    pub middle_name: String,
    pub surname: String,
    pub gender: String,
    pub dob: String,
    pub birth_date: String,
    pub birth_country: String,
    pub birth_state: String,
    pub birth_lga: String,
    pub marital_status: String,
    pub email: String,
    pub telephone_no: String,
    pub occupation: String,
    pub lga_of_origin: String,
    pub state_of_origin: String,
    pub watch_listed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MashupIdentifiers {
    pub nin: String,
    pub bvn: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MashupResidence {
    pub address: String,
    pub town: String,
    pub lga: String,
    pub state: String,
    pub residence_status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MashupBiometrics {
    pub photo: String,
}
