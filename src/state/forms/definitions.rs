//! Concrete form definitions for the two intake workflows

use super::field::FieldDescriptor;
use super::schema::FieldSchema;
use super::validate::{validate_claim, validate_registration, ValidatorFn};

/// Per-use-site parameterization of the generic form engine: one schema,
/// one validation policy, and the strings the submit flow displays.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub validator: ValidatorFn,
    pub success_message: &'static str,
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
    schema: FieldSchema,
}

impl FormDefinition {
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }
}

/// The claim upload form: policy, insured, incident and vehicle scalars,
/// a free-text description and an optional supporting image.
pub fn claim_form() -> FormDefinition {
    let schema = FieldSchema::new(vec![
        FieldDescriptor::text("months_as_customer", "Months as Customer"),
        FieldDescriptor::text("age", "Age"),
        FieldDescriptor::text("policy_number", "Policy Number"),
        FieldDescriptor::text("policy_bind_date", "Policy Bind Date"),
        FieldDescriptor::text("policy_state", "Policy State"),
        FieldDescriptor::text("policy_csl", "Policy CSL"),
        FieldDescriptor::text("policy_deductable", "Policy Deductable"),
        FieldDescriptor::text("policy_annual_premium", "Policy Annual Premium"),
        FieldDescriptor::text("umbrella_limit", "Umbrella Limit"),
        FieldDescriptor::text("insured_zip", "Insured ZIP"),
        FieldDescriptor::text("insured_sex", "Insured Sex"),
        FieldDescriptor::text("insured_education_level", "Insured Education Level"),
        FieldDescriptor::text("insured_occupation", "Insured Occupation"),
        FieldDescriptor::text("insured_hobbies", "Insured Hobbies"),
        FieldDescriptor::text("insured_relationship", "Insured Relationship"),
        FieldDescriptor::text("capital_gains", "Capital Gains"),
        FieldDescriptor::text("capital_loss", "Capital Loss"),
        FieldDescriptor::text("incident_date", "Incident Date"),
        FieldDescriptor::text("incident_type", "Incident Type"),
        FieldDescriptor::text("collision_type", "Collision Type"),
        FieldDescriptor::text("incident_severity", "Incident Severity"),
        FieldDescriptor::text("authorities_contacted", "Authorities Contacted"),
        FieldDescriptor::text("incident_state", "Incident State"),
        FieldDescriptor::text("incident_city", "Incident City"),
        FieldDescriptor::text("incident_location", "Incident Location"),
        FieldDescriptor::text("incident_hour_of_the_day", "Incident Hour of the Day"),
        FieldDescriptor::text("number_of_vehicles_involved", "Number of Vehicles Involved"),
        FieldDescriptor::text("property_damage", "Property Damage"),
        FieldDescriptor::text("bodily_injuries", "Bodily Injuries"),
        FieldDescriptor::text("witnesses", "Witnesses"),
        FieldDescriptor::text("police_report_available", "Police Report Available"),
        FieldDescriptor::text("total_claim_amount", "Total Claim Amount"),
        FieldDescriptor::text("injury_claim", "Injury Claim"),
        FieldDescriptor::text("property_claim", "Property Claim"),
        FieldDescriptor::text("vehicle_claim", "Vehicle Claim"),
        FieldDescriptor::text("auto_make", "Auto Make"),
        FieldDescriptor::text("auto_model", "Auto Model"),
        FieldDescriptor::text("auto_year", "Auto Year"),
        FieldDescriptor::multiline("claim_description", "Claim Description"),
        FieldDescriptor::file("claim_image", "Upload Image"),
    ]);
    FormDefinition {
        key: "claim",
        title: "Upload Claim",
        validator: validate_claim,
        success_message: "Claim submitted successfully!",
        submit_label: "Submit Claim",
        submitting_label: "Submitting...",
        schema,
    }
}

/// The customer registration form: contact details plus optional vehicle,
/// claim type, photo and signature uploads.
pub fn customer_registration_form() -> FormDefinition {
    let schema = FieldSchema::new(vec![
        FieldDescriptor::text("name", "Full Name"),
        FieldDescriptor::text("address", "Address"),
        FieldDescriptor::text("email", "Email"),
        FieldDescriptor::text("vehicle", "Vehicle Details"),
        FieldDescriptor::text("claim_type", "Claim Type"),
        FieldDescriptor::file("photo", "Upload Photo"),
        FieldDescriptor::file("signature", "Upload Signature"),
    ]);
    FormDefinition {
        key: "customer_registration",
        title: "Customer Registration",
        validator: validate_registration,
        success_message: "Customer registered successfully!",
        submit_label: "Register",
        submitting_label: "Registering...",
        schema,
    }
}
