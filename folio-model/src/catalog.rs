//! Compiled-in project table backing the project detail modal.

use crate::project::ProjectRecord;

/// Read-only lookup table from project id to record.
#[derive(Debug, Clone, Copy)]
pub struct ProjectCatalog {
    records: &'static [ProjectRecord],
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProjectCatalog {
    pub const fn new(records: &'static [ProjectRecord]) -> Self {
        Self { records }
    }

    /// The portfolio's own projects.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_PROJECTS)
    }

    pub fn get(&self, id: &str) -> Option<&'static ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

}

const BUILTIN_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "1",
        title: "IND Submission for Novel Oncology Drug",
        category: "Regulatory Submissions",
        tag: "submissions",
        description: "Led the preparation and submission of an Investigational New Drug application for a breakthrough oncology therapy.",
        details: r#"<h3>Project Overview</h3>
<p>This project involved the comprehensive preparation and submission of an IND application for a novel oncology drug targeting advanced solid tumors. The submission required coordination across multiple departments and strict adherence to FDA regulations.</p>
<h4>Key Responsibilities</h4>
<ul>
    <li>Coordinated cross-functional teams including clinical, CMC, and nonclinical groups</li>
    <li>Prepared regulatory strategy and submission timeline</li>
    <li>Authored key sections of the IND application</li>
    <li>Managed FDA pre-IND meeting and responses to agency questions</li>
    <li>Ensured compliance with 21 CFR Part 312 requirements</li>
</ul>
<h4>Outcomes</h4>
<ul>
    <li>Successfully submitted IND within planned timeline</li>
    <li>Received FDA clearance to proceed with Phase I clinical trial</li>
    <li>Established strong foundation for ongoing regulatory interactions</li>
</ul>
<h4>Regulatory Areas</h4>
<p><strong>FDA Regulations:</strong> 21 CFR Part 312, ICH M4, ICH E6</p>"#,
    },
    ProjectRecord {
        id: "2",
        title: "Manufacturing Facility Compliance Audit",
        category: "GMP Compliance",
        tag: "compliance",
        description: "Conducted comprehensive GMP compliance audit for pharmaceutical manufacturing facility.",
        details: r#"<h3>Project Overview</h3>
<p>Performed a thorough GMP compliance audit of a pharmaceutical manufacturing facility to identify gaps and ensure readiness for FDA inspection.</p>
<h4>Key Responsibilities</h4>
<ul>
    <li>Conducted on-site audit of manufacturing operations</li>
    <li>Reviewed batch records, SOPs, and quality systems</li>
    <li>Identified compliance gaps and areas for improvement</li>
    <li>Developed corrective action and preventive action (CAPA) plans</li>
    <li>Provided training to facility personnel on GMP requirements</li>
</ul>
<h4>Outcomes</h4>
<ul>
    <li>Identified and addressed 15 critical compliance gaps</li>
    <li>Implemented robust quality management system improvements</li>
    <li>Facility successfully passed subsequent FDA inspection</li>
</ul>
<h4>Regulatory Areas</h4>
<p><strong>Standards:</strong> 21 CFR Part 210/211, ICH Q7, EU GMP Guidelines</p>"#,
    },
    ProjectRecord {
        id: "3",
        title: "Global Regulatory Strategy Development",
        category: "Global Strategy",
        tag: "strategy",
        description: "Developed comprehensive global regulatory strategy for medical device launch across multiple markets.",
        details: r#"<h3>Project Overview</h3>
<p>Created a harmonized global regulatory strategy for a Class III medical device, enabling simultaneous market entry across US, EU, and Asian markets.</p>
<h4>Key Responsibilities</h4>
<ul>
    <li>Analyzed regulatory requirements across multiple jurisdictions</li>
    <li>Developed integrated submission strategy and timeline</li>
    <li>Coordinated with local regulatory consultants</li>
    <li>Identified opportunities for regulatory harmonization</li>
    <li>Managed regulatory intelligence and landscape monitoring</li>
</ul>
<h4>Outcomes</h4>
<ul>
    <li>Achieved market authorization in 5 countries within 18 months</li>
    <li>Reduced regulatory costs by 30% through strategic planning</li>
    <li>Established framework for future global product launches</li>
</ul>
<h4>Regulatory Areas</h4>
<p><strong>Regions:</strong> FDA (US), MDR (EU), PMDA (Japan), NMPA (China), TGA (Australia)</p>"#,
    },
    ProjectRecord {
        id: "4",
        title: "Phase III Clinical Trial Protocol Review",
        category: "Clinical Trials",
        tag: "clinical",
        description: "Reviewed and optimized Phase III clinical trial protocol for cardiovascular drug.",
        details: r#"<h3>Project Overview</h3>
<p>Conducted comprehensive regulatory review of a Phase III clinical trial protocol for a novel cardiovascular therapy, ensuring compliance with ICH-GCP guidelines and regulatory requirements.</p>
<h4>Key Responsibilities</h4>
<ul>
    <li>Reviewed protocol design and endpoints for regulatory acceptability</li>
    <li>Ensured compliance with ICH-GCP and local regulations</li>
    <li>Provided input on informed consent documents</li>
    <li>Coordinated with clinical operations and biostatistics teams</li>
    <li>Prepared regulatory submissions for trial initiation</li>
</ul>
<h4>Outcomes</h4>
<ul>
    <li>Protocol approved by regulatory authorities in all planned countries</li>
    <li>Trial initiated on schedule with no regulatory delays</li>
    <li>Established efficient processes for protocol amendments</li>
</ul>
<h4>Regulatory Areas</h4>
<p><strong>Guidelines:</strong> ICH E6 (GCP), ICH E8, ICH E9, 21 CFR Part 50/56</p>"#,
    },
    ProjectRecord {
        id: "5",
        title: "New Drug Application for Rare Disease",
        category: "NDA Submission",
        tag: "submissions",
        description: "Managed NDA submission for orphan drug designation with breakthrough therapy status.",
        details: r#"<h3>Project Overview</h3>
<p>Led the preparation and submission of a New Drug Application for a rare disease therapy, including orphan drug designation and breakthrough therapy designation requests.</p>
<h4>Key Responsibilities</h4>
<ul>
    <li>Developed comprehensive NDA submission strategy</li>
    <li>Coordinated preparation of all NDA modules (eCTD format)</li>
    <li>Managed orphan drug and breakthrough therapy designation applications</li>
    <li>Prepared for FDA advisory committee meeting</li>
    <li>Coordinated responses to FDA information requests</li>
</ul>
<h4>Outcomes</h4>
<ul>
    <li>Successfully submitted NDA with priority review designation</li>
    <li>Granted orphan drug and breakthrough therapy status</li>
    <li>Received FDA approval within 8 months of submission</li>
</ul>
<h4>Regulatory Areas</h4>
<p><strong>Programs:</strong> Orphan Drug Act, Breakthrough Therapy, Priority Review, Accelerated Approval</p>"#,
    },
    ProjectRecord {
        id: "6",
        title: "Pharmacovigilance System Implementation",
        category: "Post-Market Surveillance",
        tag: "post-market",
        description: "Implemented robust pharmacovigilance system for post-market safety monitoring.",
        details: r#"<h3>Project Overview</h3>
<p>Designed and implemented a comprehensive pharmacovigilance system for post-market safety monitoring of multiple marketed products.</p>
<h4>Key Responsibilities</h4>
<ul>
    <li>Developed pharmacovigilance system master file</li>
    <li>Established adverse event reporting procedures</li>
    <li>Implemented signal detection and risk management processes</li>
    <li>Trained personnel on pharmacovigilance requirements</li>
    <li>Managed regulatory reporting obligations (periodic safety reports)</li>
</ul>
<h4>Outcomes</h4>
<ul>
    <li>Established compliant pharmacovigilance system meeting global requirements</li>
    <li>Achieved 100% on-time regulatory safety reporting</li>
    <li>Successfully managed product safety profile and risk mitigation</li>
</ul>
<h4>Regulatory Areas</h4>
<p><strong>Requirements:</strong> 21 CFR Part 314.80, ICH E2A-E2F, EU Pharmacovigilance Directive</p>"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_six_unique_projects() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.records.len(), 6);
        let mut ids: Vec<_> = catalog.records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = ProjectCatalog::builtin();
        let record = catalog.get("3").expect("project 3");
        assert_eq!(record.title, "Global Regulatory Strategy Development");
        assert_eq!(record.category_tag().as_str(), "strategy");
    }

    #[test]
    fn unknown_id_is_absent() {
        assert!(ProjectCatalog::builtin().get("99").is_none());
    }
}
