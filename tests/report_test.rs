//! End-to-end: assemble the assessment report and save it

mod common;

use std::sync::Arc;

use tempfile::TempDir;

use common::read_blocks;
use reportdoc::application::assessment_report;
use reportdoc::application::report::TitlePage;
use reportdoc::application::services::DocumentService;
use reportdoc::config::Settings;
use reportdoc::infrastructure::di::ServiceContainer;
use reportdoc::infrastructure::traits::RealFileSystem;
use reportdoc::util::testing::init_test_setup;

#[test]
fn given_default_report_when_saving_then_outline_survives_read_back() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Internal_Assessment_Attendance_Report.docx");

    let doc = assessment_report(&TitlePage::default());
    let saved = DocumentService::new(Arc::new(RealFileSystem))
        .save(&doc, &path)
        .unwrap();

    let read = read_blocks(&path);
    assert_eq!(saved.blocks, 47);
    assert_eq!(read.len(), 47);

    let level1: Vec<&str> = read
        .iter()
        .filter(|b| b.style.as_deref() == Some("Heading1"))
        .map(|b| b.text.as_str())
        .collect();
    assert_eq!(level1.len(), 8);
    assert!(level1[0].contains("Attendance Management System"));
    assert_eq!(
        &level1[1..],
        [
            "1. Synopsis",
            "2. Requirements",
            "3. System Design",
            "4. Implementation",
            "5. Results and Discussion",
            "6. Screenshots",
            "7. References",
        ]
    );

    let level2 = read
        .iter()
        .filter(|b| b.style.as_deref() == Some("Heading2"))
        .count();
    assert_eq!(level2, 17);
    assert_eq!(read.iter().filter(|b| b.style.is_none()).count(), 22);
}

#[test]
fn given_title_page_values_when_saving_then_they_appear_in_front_matter() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.docx");
    let settings = Settings {
        output: path.clone(),
        title_page: TitlePage {
            author: "Asha Rao".into(),
            register_number: "1MC22MCA001".into(),
            ..TitlePage::default()
        },
    };
    let container = ServiceContainer::new(settings);

    let doc = assessment_report(&container.settings.title_page);
    container
        .document_service()
        .save(&doc, &container.settings.output)
        .unwrap();

    let read = read_blocks(&path);
    assert_eq!(
        read[2].text,
        "\nSubmitted by: Asha Rao\nRegister Number: 1MC22MCA001"
    );
    assert!(read[3].text.contains("[Guide Name]"));
}

#[test]
fn given_report_when_saving_then_subsection_bodies_keep_line_breaks() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.docx");

    let doc = assessment_report(&TitlePage::default());
    DocumentService::new(Arc::new(RealFileSystem))
        .save(&doc, &path)
        .unwrap();

    let read = read_blocks(&path);
    let technologies = read
        .iter()
        .position(|b| b.text == "1.4 Technologies Used")
        .expect("technologies heading");
    assert_eq!(
        read[technologies + 1].text,
        "Frontend: React.js, Tailwind CSS\nBackend: Node.js with Express.js\nDatabase: MongoDB\nAdditional Tools: Chart.js for analytics, Recharts for visualization"
    );
}
