//! The assessment & attendance mini-project report
//!
//! A fixed outline appended in one linear pass. Only the title-page values
//! vary; every other block is literal text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Document, HeadingLevel};

pub const REPORT_TITLE: &str = "Internal Assessment & Attendance Management System";

/// Front-matter values substituted into the title page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TitlePage {
    pub author: String,
    pub register_number: String,
    pub guide: String,
    pub institution: String,
    pub year: String,
    pub degree: String,
    pub department: String,
}

impl Default for TitlePage {
    fn default() -> Self {
        Self {
            author: "[Your Name]".into(),
            register_number: "[Your Register Number]".into(),
            guide: "[Guide Name]".into(),
            institution: "[Institution Name]".into(),
            year: "[Year]".into(),
            degree: "Master of Computer Applications (MCA)".into(),
            department: "Department of Computer Applications".into(),
        }
    }
}

/// Build the full report document.
pub fn assessment_report(title_page: &TitlePage) -> Document {
    let mut doc = Document::new();

    add_title_page(&mut doc, title_page);
    add_synopsis(&mut doc);
    add_requirements(&mut doc);
    add_system_design(&mut doc);
    add_implementation(&mut doc);
    add_results(&mut doc);
    add_screenshots(&mut doc);
    add_references(&mut doc);

    debug!("assessment_report: {} blocks", doc.len());
    doc
}

fn section(doc: &mut Document, title: &str) {
    doc.add_heading(title, HeadingLevel::SECTION);
}

fn subsection(doc: &mut Document, title: &str, body: &str) {
    doc.add_heading(title, HeadingLevel::SUBSECTION);
    doc.add_paragraph(body);
}

fn add_title_page(doc: &mut Document, t: &TitlePage) {
    doc.add_heading(REPORT_TITLE, HeadingLevel::SECTION);
    doc.add_paragraph(format!(
        "\nMini Project Report\n\nSubmitted in partial fulfillment for the requirement of\n{}\n\n{}",
        t.degree, t.department
    ));
    doc.add_paragraph(format!(
        "\nSubmitted by: {}\nRegister Number: {}",
        t.author, t.register_number
    ));
    doc.add_paragraph(format!(
        "\nUnder the guidance of: {}\n\n{}\n{}",
        t.guide, t.institution, t.year
    ));
}

fn add_synopsis(doc: &mut Document) {
    section(doc, "1. Synopsis");
    subsection(
        doc,
        "1.1 Project Overview",
        "The Internal Assessment & Attendance Management System is a web-based platform designed to streamline academic processes for students and faculty. It allows efficient management of attendance records, internal assessment (IA) marks, and report generation while ensuring role-based access for different users.",
    );
    subsection(
        doc,
        "1.2 Scope",
        "The system includes functionalities such as student registration, faculty assignment, attendance tracking, IA marks management, and reporting. It does not cover external examinations or administrative activities outside academic evaluations.",
    );
    subsection(
        doc,
        "1.3 Target Audience",
        "This system is designed for students, faculty members, Head of Department (HOD), and examination authorities in educational institutions.",
    );
    subsection(
        doc,
        "1.4 Technologies Used",
        "Frontend: React.js, Tailwind CSS\nBackend: Node.js with Express.js\nDatabase: MongoDB\nAdditional Tools: Chart.js for analytics, Recharts for visualization",
    );
}

fn add_requirements(doc: &mut Document) {
    section(doc, "2. Requirements");
    subsection(
        doc,
        "2.1 Functional Requirements",
        "• User authentication (students, faculty, HOD, admin)\n• Attendance tracking with real-time updates\n• IA Marks entry and modification by faculty\n• Automated report generation for attendance and marks\n• Role-based dashboard for different users",
    );
    subsection(
        doc,
        "2.2 Non-Functional Requirements",
        "• Security: Encrypted user authentication\n• Scalability: Supports multiple institutions\n• Usability: User-friendly interface\n• Performance: Optimized database queries",
    );
    subsection(
        doc,
        "2.3 System Requirements",
        "• Operating System: Windows/Linux/MacOS\n• Browser: Chrome, Firefox, Edge\n• Server: Node.js runtime\n• Database: MongoDB",
    );
    subsection(
        doc,
        "2.4 Third-Party Tools/Libraries",
        "• bcrypt.js for password hashing\n• JWT for authentication\n• Multer for file uploads\n• Nodemon for development server monitoring",
    );
}

fn add_system_design(doc: &mut Document) {
    section(doc, "3. System Design");
    subsection(
        doc,
        "3.1 Database Design",
        "The system uses MongoDB with collections such as 'Users', 'Attendance', and 'IAMarks'. User roles determine access to specific collections.",
    );
    subsection(
        doc,
        "3.2 User Interface Design",
        "The UI is built with React.js and Tailwind CSS, providing a responsive layout for different user roles. Dashboards include attendance charts, IA marks visualization, and real-time updates.",
    );
}

const ATTENDANCE_ROUTE_SNIPPET: &str = r#"Example API for fetching attendance data:

```javascript
router.get('/student-attendance/:email', async (req, res) => {
  const { email } = req.params;
  const student = await User.findOne({ email });
  const attendanceRecords = await Attendance.find({ usn: student.usn });
  res.json({ success: true, attendanceRecords });
});
```"#;

fn add_implementation(doc: &mut Document) {
    section(doc, "4. Implementation");
    subsection(
        doc,
        "4.1 Detailed Steps",
        "• Step 1: Set up the backend with Node.js and Express.js\n• Step 2: Design MongoDB schema for users, attendance, and marks\n• Step 3: Develop the React.js frontend with API integration\n• Step 4: Implement authentication and role-based access control\n• Step 5: Integrate data visualization with Recharts\n• Step 6: Conduct testing and optimization",
    );
    subsection(doc, "4.2 Code Snippets", ATTENDANCE_ROUTE_SNIPPET);
    subsection(
        doc,
        "4.3 Testing",
        "• Unit Testing: Jest for backend API testing\n• Integration Testing: Postman for API validation\n• User Acceptance Testing: Conducted with faculty and students",
    );
}

fn add_results(doc: &mut Document) {
    section(doc, "5. Results and Discussion");
    subsection(
        doc,
        "5.1 Functionality",
        "The system successfully allows role-based access and provides real-time updates for attendance and IA marks.",
    );
    subsection(
        doc,
        "5.2 Usability",
        "The UI is intuitive, with simple navigation for students and faculty.",
    );
    subsection(
        doc,
        "5.3 Limitations",
        "• Requires internet connectivity\n• Faculty must manually enter IA marks",
    );
    subsection(
        doc,
        "5.4 Future Work",
        "• Mobile application integration\n• AI-based student performance prediction\n• Automated attendance tracking using face recognition",
    );
}

fn add_screenshots(doc: &mut Document) {
    // placeholder, no image embedding
    section(doc, "6. Screenshots");
    doc.add_paragraph(
        "Add screenshots of login page, student dashboard, faculty dashboard, IA marks entry, and attendance graphs here.",
    );
}

fn add_references(doc: &mut Document) {
    section(doc, "7. References");
    doc.add_paragraph(
        "• React.js Documentation: https://react.dev\n• MongoDB Documentation: https://www.mongodb.com/docs\n• Node.js Express Guide: https://expressjs.com/",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentBlock;

    fn headings(doc: &Document, level: HeadingLevel) -> Vec<String> {
        doc.blocks()
            .filter(|b| b.level() == Some(level))
            .map(|b| b.text().to_string())
            .collect()
    }

    #[test]
    fn given_default_title_page_when_building_then_has_full_outline() {
        let doc = assessment_report(&TitlePage::default());

        assert_eq!(doc.len(), 47);
        assert_eq!(
            headings(&doc, HeadingLevel::SECTION),
            vec![
                REPORT_TITLE,
                "1. Synopsis",
                "2. Requirements",
                "3. System Design",
                "4. Implementation",
                "5. Results and Discussion",
                "6. Screenshots",
                "7. References",
            ]
        );
        assert_eq!(headings(&doc, HeadingLevel::SUBSECTION).len(), 17);
    }

    #[test]
    fn given_default_title_page_when_building_then_keeps_placeholders() {
        let doc = assessment_report(&TitlePage::default());
        let submitted = doc.blocks().nth(2).unwrap();

        assert_eq!(
            submitted.text(),
            "\nSubmitted by: [Your Name]\nRegister Number: [Your Register Number]"
        );
    }

    #[test]
    fn given_custom_title_page_when_building_then_substitutes_values() {
        let title_page = TitlePage {
            author: "Asha Rao".into(),
            register_number: "1MC22MCA001".into(),
            guide: "Dr. K. Iyer".into(),
            institution: "City College".into(),
            year: "2024".into(),
            ..TitlePage::default()
        };

        let doc = assessment_report(&title_page);
        let texts: Vec<&str> = doc.blocks().map(ContentBlock::text).collect();

        assert_eq!(
            texts[2],
            "\nSubmitted by: Asha Rao\nRegister Number: 1MC22MCA001"
        );
        assert_eq!(
            texts[3],
            "\nUnder the guidance of: Dr. K. Iyer\n\nCity College\n2024"
        );
        assert!(texts[1].contains("Master of Computer Applications (MCA)"));
    }

    #[test]
    fn given_report_then_every_subsection_is_followed_by_its_paragraph() {
        let doc = assessment_report(&TitlePage::default());
        let blocks: Vec<_> = doc.blocks().collect();

        for (i, block) in blocks.iter().enumerate() {
            if block.level() == Some(HeadingLevel::SUBSECTION) {
                assert!(
                    matches!(blocks.get(i + 1), Some(ContentBlock::Paragraph { .. })),
                    "subsection {:?} should be followed by a paragraph",
                    block.text()
                );
            }
        }
    }

    #[test]
    fn given_code_snippet_then_stays_a_single_paragraph() {
        let doc = assessment_report(&TitlePage::default());
        let snippet = doc
            .blocks()
            .find(|b| b.text().starts_with("Example API"))
            .expect("snippet paragraph");

        assert!(snippet.level().is_none());
        assert!(snippet.text().contains("```javascript\nrouter.get("));
        assert!(snippet.text().ends_with("```"));
    }
}
