//! Request and response bodies of the external API.

use serde::{Deserialize, Deserializer, Serialize};
use triz_core::ContradictionEntry;

/// `examples` arrives either as one string or as a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Examples {
    One(String),
    Many(Vec<String>),
}

fn examples_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Examples> = Option::deserialize(deserializer)?;
    let list = match raw {
        None => Vec::new(),
        Some(Examples::One(text)) => text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Examples::Many(items)) => items
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect(),
    };
    Ok(list)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPrinciple {
    /// Database key on the remote side.
    pub id: u64,
    /// Official TRIZ number.
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "examples_list")]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiParameter {
    pub id: u64,
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One row of `/triz/matrix/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMatrixCell {
    pub id: u64,
    pub improving_parameter: ApiParameter,
    pub worsening_parameter: ApiParameter,
    #[serde(default)]
    pub principles: Vec<ApiPrinciple>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub inventors: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub patent_number: Option<String>,
}

/// Result of `POST /patents/analyze/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub metadata: Option<PatentMetadata>,
    #[serde(default)]
    pub contradictions: Option<Vec<ContradictionEntry>>,
    #[serde(default, rename = "fileUrl")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patent {
    pub id: u64,
    pub patent_number: String,
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub filing_date: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub inventors: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub pdf_file: Option<String>,
    #[serde(default)]
    pub pdf_file_name: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
}

/// Body for creating or updating a patent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatent {
    pub patent_number: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    pub inventors: String,
    pub assignee: String,
}

impl NewPatent {
    /// Text fields as multipart form pairs.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("patent_number", self.patent_number.clone()),
            ("title", self.title.clone()),
            ("abstract", self.abstract_text.clone()),
            ("inventors", self.inventors.clone()),
            ("assignee", self.assignee.clone()),
        ];
        if let Some(d) = &self.filing_date {
            fields.push(("filing_date", d.clone()));
        }
        if let Some(d) = &self.publication_date {
            fields.push(("publication_date", d.clone()));
        }
        fields
    }
}

/// A single-contradiction analysis as the remote service stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteAnalysis {
    pub id: u64,
    pub patent: Patent,
    pub improving_parameter: ApiParameter,
    pub worsening_parameter: ApiParameter,
    #[serde(default)]
    pub applied_principles: Vec<ApiPrinciple>,
    pub analysis_date: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: u64,
    pub citing_patent: Patent,
    pub cited_patent: Patent,
    pub citation_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn examples_accept_string_or_list() {
        let one: ApiPrinciple = serde_json::from_value(json!({
            "id": 7, "number": 1, "name": "Segmentation",
            "description": "Divide an object",
            "examples": "Modular furniture\n\n  Sectional boats "
        }))
        .unwrap();
        assert_eq!(one.examples, vec!["Modular furniture", "Sectional boats"]);

        let many: ApiPrinciple = serde_json::from_value(json!({
            "id": 7, "number": 1, "name": "Segmentation",
            "examples": ["A", " ", "B"]
        }))
        .unwrap();
        assert_eq!(many.examples, vec!["A", "B"]);

        let none: ApiPrinciple = serde_json::from_value(json!({
            "id": 7, "number": 1, "name": "Segmentation", "examples": null
        }))
        .unwrap();
        assert!(none.examples.is_empty());
    }

    #[test]
    fn analyze_response_fields_are_optional() {
        let empty: AnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AnalyzeResponse::default());

        let full: AnalyzeResponse = serde_json::from_value(json!({
            "metadata": {"title": "Drone arm", "abstract": "A folding arm"},
            "contradictions": [{
                "contradiction": {
                    "improving_parameter": "Speed",
                    "worsening_parameter": "Power"
                },
                "suggested_principles": ["Dynamics"]
            }],
            "fileUrl": "https://cdn.example.com/x.pdf"
        }))
        .unwrap();
        let meta = full.metadata.unwrap();
        assert_eq!(meta.abstract_text.as_deref(), Some("A folding arm"));
        assert_eq!(full.contradictions.unwrap()[0].suggested_principles, vec!["Dynamics"]);
        assert_eq!(full.file_url.as_deref(), Some("https://cdn.example.com/x.pdf"));
    }
}
