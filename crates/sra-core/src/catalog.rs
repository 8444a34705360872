//! # Seed Catalog — HIPAA Security Rule Control Set
//!
//! The immutable, ordered control catalog every fresh assessment starts
//! from, drawn from the Security Rule's safeguard standards:
//!   - Administrative safeguards (45 CFR 164.308)
//!   - Physical safeguards (45 CFR 164.310)
//!   - Technical safeguards (45 CFR 164.312)
//!   - Documentation requirements (45 CFR 164.316)
//!
//! Required implementation specifications are `core` controls; addressable
//! ones are `supplemental`. Identity is the control id, unique across the
//! whole catalog (asserted in tests).

use crate::category::SafeguardCategory;
use crate::control::{Control, ControlId, ControlType};
use crate::status::ControlStatus;

/// Number of controls in the seed catalog.
pub const SEED_CONTROL_COUNT: usize = 42;

/// Build one catalog control: `not-started`, empty notes, no evidence.
fn seed(
    id: &str,
    title: &str,
    reference: &str,
    control_type: ControlType,
    category: SafeguardCategory,
    description: &str,
) -> Control {
    Control {
        id: ControlId::new(id),
        title: title.to_string(),
        reference: reference.to_string(),
        control_type,
        category,
        description: Some(description.to_string()),
        status: ControlStatus::NotStarted,
        notes: String::new(),
        evidence_links: None,
    }
}

/// The full seed catalog, in canonical order: administrative, physical,
/// technical, documentation.
///
/// Every control starts `not-started` with empty notes. Controls are never
/// deleted individually; the only way back to this set is a bulk reset.
pub fn seed_controls() -> Vec<Control> {
    use ControlType::{Core, Supplemental};
    use SafeguardCategory::{Administrative, Documentation, Physical, Technical};

    vec![
        // ── Administrative safeguards (164.308) ─────────────────────────
        seed(
            "adm-01",
            "Risk Analysis",
            "164.308(a)(1)(ii)(A)",
            Core,
            Administrative,
            "Conduct an accurate and thorough assessment of the potential risks \
             and vulnerabilities to the confidentiality, integrity, and \
             availability of ePHI held by the organization.",
        ),
        seed(
            "adm-02",
            "Risk Management",
            "164.308(a)(1)(ii)(B)",
            Core,
            Administrative,
            "Implement security measures sufficient to reduce risks and \
             vulnerabilities to a reasonable and appropriate level.",
        ),
        seed(
            "adm-03",
            "Sanction Policy",
            "164.308(a)(1)(ii)(C)",
            Core,
            Administrative,
            "Apply appropriate sanctions against workforce members who fail to \
             comply with security policies and procedures.",
        ),
        seed(
            "adm-04",
            "Information System Activity Review",
            "164.308(a)(1)(ii)(D)",
            Core,
            Administrative,
            "Regularly review records of information system activity, such as \
             audit logs, access reports, and security incident tracking reports.",
        ),
        seed(
            "adm-05",
            "Assigned Security Responsibility",
            "164.308(a)(2)",
            Core,
            Administrative,
            "Identify the security official responsible for the development and \
             implementation of the security policies and procedures.",
        ),
        seed(
            "adm-06",
            "Workforce Authorization and Supervision",
            "164.308(a)(3)(ii)(A)",
            Supplemental,
            Administrative,
            "Implement procedures for the authorization and/or supervision of \
             workforce members who work with ePHI or in locations where it \
             might be accessed.",
        ),
        seed(
            "adm-07",
            "Workforce Clearance Procedure",
            "164.308(a)(3)(ii)(B)",
            Supplemental,
            Administrative,
            "Implement procedures to determine that the access of a workforce \
             member to ePHI is appropriate.",
        ),
        seed(
            "adm-08",
            "Termination Procedures",
            "164.308(a)(3)(ii)(C)",
            Supplemental,
            Administrative,
            "Implement procedures for terminating access to ePHI when employment \
             ends or access is no longer appropriate.",
        ),
        seed(
            "adm-09",
            "Access Authorization",
            "164.308(a)(4)(ii)(B)",
            Supplemental,
            Administrative,
            "Implement policies and procedures for granting access to ePHI, for \
             example through access to a workstation, transaction, program, or \
             process.",
        ),
        seed(
            "adm-10",
            "Security Awareness and Training",
            "164.308(a)(5)(i)",
            Core,
            Administrative,
            "Implement a security awareness and training program for all members \
             of the workforce, including management.",
        ),
        seed(
            "adm-11",
            "Protection from Malicious Software",
            "164.308(a)(5)(ii)(B)",
            Supplemental,
            Administrative,
            "Implement procedures for guarding against, detecting, and reporting \
             malicious software.",
        ),
        seed(
            "adm-12",
            "Password Management",
            "164.308(a)(5)(ii)(D)",
            Supplemental,
            Administrative,
            "Implement procedures for creating, changing, and safeguarding \
             passwords.",
        ),
        seed(
            "adm-13",
            "Security Incident Response and Reporting",
            "164.308(a)(6)(ii)",
            Core,
            Administrative,
            "Identify and respond to suspected or known security incidents; \
             mitigate, to the extent practicable, harmful effects; and document \
             incidents and their outcomes.",
        ),
        seed(
            "adm-14",
            "Data Backup Plan",
            "164.308(a)(7)(ii)(A)",
            Core,
            Administrative,
            "Establish and implement procedures to create and maintain \
             retrievable exact copies of ePHI.",
        ),
        seed(
            "adm-15",
            "Disaster Recovery Plan",
            "164.308(a)(7)(ii)(B)",
            Core,
            Administrative,
            "Establish (and implement as needed) procedures to restore any loss \
             of data.",
        ),
        seed(
            "adm-16",
            "Emergency Mode Operation Plan",
            "164.308(a)(7)(ii)(C)",
            Core,
            Administrative,
            "Establish (and implement as needed) procedures to enable \
             continuation of critical business processes for protection of the \
             security of ePHI while operating in emergency mode.",
        ),
        seed(
            "adm-17",
            "Contingency Plan Testing and Revision",
            "164.308(a)(7)(ii)(D)",
            Supplemental,
            Administrative,
            "Implement procedures for periodic testing and revision of \
             contingency plans.",
        ),
        seed(
            "adm-18",
            "Periodic Security Evaluation",
            "164.308(a)(8)",
            Core,
            Administrative,
            "Perform periodic technical and nontechnical evaluations in response \
             to environmental or operational changes affecting the security of \
             ePHI.",
        ),
        seed(
            "adm-19",
            "Business Associate Agreements",
            "164.308(b)(1)",
            Core,
            Administrative,
            "Obtain satisfactory assurances, through written contract, that \
             business associates will appropriately safeguard ePHI created, \
             received, maintained, or transmitted on the organization's behalf.",
        ),
        // ── Physical safeguards (164.310) ───────────────────────────────
        seed(
            "phy-01",
            "Facility Security Plan",
            "164.310(a)(2)(ii)",
            Supplemental,
            Physical,
            "Implement policies and procedures to safeguard the facility and the \
             equipment therein from unauthorized physical access, tampering, and \
             theft.",
        ),
        seed(
            "phy-02",
            "Access Control and Validation Procedures",
            "164.310(a)(2)(iii)",
            Supplemental,
            Physical,
            "Implement procedures to control and validate a person's access to \
             facilities based on their role or function, including visitor \
             control.",
        ),
        seed(
            "phy-03",
            "Workstation Use",
            "164.310(b)",
            Core,
            Physical,
            "Implement policies and procedures that specify the proper functions \
             to be performed and the manner in which they are to be performed at \
             workstations that can access ePHI.",
        ),
        seed(
            "phy-04",
            "Workstation Security",
            "164.310(c)",
            Core,
            Physical,
            "Implement physical safeguards for all workstations that access \
             ePHI, to restrict access to authorized users.",
        ),
        seed(
            "phy-05",
            "Media Disposal",
            "164.310(d)(2)(i)",
            Core,
            Physical,
            "Implement policies and procedures to address the final disposition \
             of ePHI, and/or the hardware or electronic media on which it is \
             stored.",
        ),
        seed(
            "phy-06",
            "Media Re-use",
            "164.310(d)(2)(ii)",
            Core,
            Physical,
            "Implement procedures for removal of ePHI from electronic media \
             before the media are made available for re-use.",
        ),
        seed(
            "phy-07",
            "Media Accountability",
            "164.310(d)(2)(iii)",
            Supplemental,
            Physical,
            "Maintain a record of the movements of hardware and electronic media \
             and any person responsible therefor.",
        ),
        seed(
            "phy-08",
            "Data Backup Before Equipment Movement",
            "164.310(d)(2)(iv)",
            Supplemental,
            Physical,
            "Create a retrievable, exact copy of ePHI, when needed, before \
             movement of equipment.",
        ),
        // ── Technical safeguards (164.312) ──────────────────────────────
        seed(
            "tec-01",
            "Unique User Identification",
            "164.312(a)(2)(i)",
            Core,
            Technical,
            "Assign a unique name and/or number for identifying and tracking \
             user identity.",
        ),
        seed(
            "tec-02",
            "Emergency Access Procedure",
            "164.312(a)(2)(ii)",
            Core,
            Technical,
            "Establish (and implement as needed) procedures for obtaining \
             necessary ePHI during an emergency.",
        ),
        seed(
            "tec-03",
            "Automatic Logoff",
            "164.312(a)(2)(iii)",
            Supplemental,
            Technical,
            "Implement electronic procedures that terminate an electronic \
             session after a predetermined time of inactivity.",
        ),
        seed(
            "tec-04",
            "Encryption at Rest",
            "164.312(a)(2)(iv)",
            Supplemental,
            Technical,
            "Implement a mechanism to encrypt and decrypt ePHI.",
        ),
        seed(
            "tec-05",
            "Audit Controls",
            "164.312(b)",
            Core,
            Technical,
            "Implement hardware, software, and/or procedural mechanisms that \
             record and examine activity in information systems that contain or \
             use ePHI.",
        ),
        seed(
            "tec-06",
            "ePHI Integrity Safeguards",
            "164.312(c)(1)",
            Core,
            Technical,
            "Implement policies and procedures to protect ePHI from improper \
             alteration or destruction.",
        ),
        seed(
            "tec-07",
            "ePHI Authentication Mechanism",
            "164.312(c)(2)",
            Supplemental,
            Technical,
            "Implement electronic mechanisms to corroborate that ePHI has not \
             been altered or destroyed in an unauthorized manner.",
        ),
        seed(
            "tec-08",
            "Person or Entity Authentication",
            "164.312(d)",
            Core,
            Technical,
            "Implement procedures to verify that a person or entity seeking \
             access to ePHI is the one claimed.",
        ),
        seed(
            "tec-09",
            "Transmission Integrity Controls",
            "164.312(e)(2)(i)",
            Supplemental,
            Technical,
            "Implement security measures to ensure that electronically \
             transmitted ePHI is not improperly modified without detection \
             until disposed of.",
        ),
        seed(
            "tec-10",
            "Transmission Encryption",
            "164.312(e)(2)(ii)",
            Supplemental,
            Technical,
            "Implement a mechanism to encrypt ePHI whenever deemed appropriate.",
        ),
        // ── Documentation requirements (164.316) ────────────────────────
        seed(
            "doc-01",
            "Security Policies and Procedures",
            "164.316(a)",
            Core,
            Documentation,
            "Implement reasonable and appropriate policies and procedures to \
             comply with the standards and implementation specifications of the \
             Security Rule.",
        ),
        seed(
            "doc-02",
            "Written Documentation",
            "164.316(b)(1)",
            Core,
            Documentation,
            "Maintain the policies and procedures in written (which may be \
             electronic) form, and maintain a written record of actions, \
             activities, and assessments the Rule requires to be documented.",
        ),
        seed(
            "doc-03",
            "Documentation Retention",
            "164.316(b)(2)(i)",
            Core,
            Documentation,
            "Retain documentation for six years from the date of its creation or \
             the date when it last was in effect, whichever is later.",
        ),
        seed(
            "doc-04",
            "Documentation Availability",
            "164.316(b)(2)(ii)",
            Core,
            Documentation,
            "Make documentation available to those persons responsible for \
             implementing the procedures to which the documentation pertains.",
        ),
        seed(
            "doc-05",
            "Documentation Review and Updates",
            "164.316(b)(2)(iii)",
            Core,
            Documentation,
            "Review documentation periodically, and update as needed in response \
             to environmental or operational changes affecting the security of \
             ePHI.",
        ),
    ]
}
