use std::fs;

use tempfile::tempdir;

use pathmerge_cli::{Args, run};

const DIAGRAM_ONE: &str = r#"{
    "name": "Apoptosis",
    "elements": [
        {
            "element": "data_node",
            "id": "n1",
            "kind": "GeneProduct",
            "label": "tp53",
            "xref": {
                "id": "G1",
                "data_source": { "full_name": "Entrez Gene", "system_code": "L" }
            }
        },
        {
            "element": "data_node",
            "id": "n2",
            "kind": "Metabolite",
            "label": "Glucose",
            "xref": {
                "id": "HMDB0122",
                "data_source": { "full_name": "HMDB", "system_code": "Ch" }
            }
        },
        { "element": "line", "id": "l1", "start": "n1", "end": "n2", "style": "Arrow" }
    ]
}"#;

const DIAGRAM_TWO: &str = r#"{
    "name": "Cell Cycle",
    "elements": [
        {
            "element": "data_node",
            "id": "x",
            "kind": "Protein",
            "label": "p53 protein",
            "xref": {
                "id": "G2",
                "data_source": { "full_name": "Entrez Gene", "system_code": "L" }
            }
        }
    ]
}"#;

const GENE_MAPPINGS: &str = r#"{
    "mappings": [
        {
            "source": {
                "id": "G1",
                "data_source": { "full_name": "Entrez Gene", "system_code": "L" }
            },
            "targets": [
                { "id": "ENSG001", "data_source": { "full_name": "Ensembl", "system_code": "En" } }
            ]
        },
        {
            "source": {
                "id": "G2",
                "data_source": { "full_name": "Entrez Gene", "system_code": "L" }
            },
            "targets": [
                { "id": "ENSG001", "data_source": { "full_name": "Ensembl", "system_code": "En" } }
            ]
        }
    ],
    "symbols": [
        {
            "xref": { "id": "ENSG001", "data_source": { "full_name": "Ensembl", "system_code": "En" } },
            "symbol": "TP53"
        }
    ]
}"#;

#[test]
fn e2e_smoke_test_merge_and_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let diagram_dir = temp_dir.path().join("diagrams");
    fs::create_dir(&diagram_dir).unwrap();
    fs::write(diagram_dir.join("01_apoptosis.json"), DIAGRAM_ONE).unwrap();
    fs::write(diagram_dir.join("02_cell_cycle.json"), DIAGRAM_TWO).unwrap();

    let mapping_path = temp_dir.path().join("genes.json");
    fs::write(&mapping_path, GENE_MAPPINGS).unwrap();

    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[graph]\ntitle = \"Smoke test\"\n\n[resolver]\ngene = {:?}\n",
            mapping_path.to_string_lossy()
        ),
    )
    .unwrap();

    let output_path = temp_dir.path().join("network.xgmml");

    let args = Args {
        input: diagram_dir.to_string_lossy().to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    run(&args).expect("run should succeed");

    let xml = fs::read_to_string(&output_path).expect("output file should exist");
    assert!(xml.contains("<graph label=\"Smoke test\""));
    // Both gene elements merged into the one canonical node.
    assert!(xml.contains("<node id=\"ENSG001\" label=\"TP53\">"));
    assert!(xml.contains("<att name=\"pathways\" value=\"0 | 1\"/>"));
    assert!(xml.contains("<att name=\"pathwayCount\" value=\"2\"/>"));
    // The metabolite kept its native identifier (no resolver configured).
    assert!(xml.contains("<node id=\"HMDB0122\" label=\"Glucose\">"));
    // The declared connection survived as one edge.
    assert!(xml.contains("<edge source=\"ENSG001\" target=\"HMDB0122\""));
    // Per-diagram title attributes are present for both diagrams.
    assert!(xml.contains("<att name=\"0 Pathway\" value=\"Apoptosis\"/>"));
    assert!(xml.contains("<att name=\"1 Pathway\" value=\"Cell Cycle\"/>"));
}

#[test]
fn e2e_missing_input_directory_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        input: temp_dir
            .path()
            .join("does_not_exist")
            .to_string_lossy()
            .to_string(),
        output: temp_dir.path().join("out.xgmml").to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}
