//! Content rule models

use super::{LoadMasterResponse, impl_api_response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content rule, sent as the `type` field of `addrule`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleType {
    #[serde(rename = "0")]
    MatchContent,
    #[serde(rename = "1")]
    AddHeader,
    #[serde(rename = "2")]
    DeleteHeader,
    #[serde(rename = "3")]
    ReplaceHeader,
    #[serde(rename = "4")]
    ModifyUrl,
    #[serde(rename = "5")]
    ReplaceBody,
}

impl RuleType {
    /// Wire value of the rule type
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::MatchContent => "0",
            RuleType::AddHeader => "1",
            RuleType::DeleteHeader => "2",
            RuleType::ReplaceHeader => "3",
            RuleType::ModifyUrl => "4",
            RuleType::ReplaceBody => "5",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request fields shared by every rule kind in `addrule` / `modrule`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "nocase", default, skip_serializing_if = "Option::is_none")]
    pub no_case: Option<bool>,
    #[serde(rename = "caseindependent", default, skip_serializing_if = "Option::is_none")]
    pub case_independent: Option<bool>,
    /// `regex`, `prefix` or `postfix`
    #[serde(rename = "matchtype", default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(rename = "inchost", default, skip_serializing_if = "Option::is_none")]
    pub include_host: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    #[serde(rename = "incquery", default, skip_serializing_if = "Option::is_none")]
    pub include_query: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(rename = "setonmatch", default, skip_serializing_if = "Option::is_none")]
    pub set_on_match: Option<i32>,
    #[serde(rename = "onlyonflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_flag: Option<i32>,
    #[serde(rename = "onlyonnoflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_no_flag: Option<i32>,
    #[serde(rename = "mustfail", default, skip_serializing_if = "Option::is_none")]
    pub must_fail: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContentRule {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "matchtype", default, skip_serializing_if = "String::is_empty")]
    pub match_type: String,
    #[serde(rename = "addhost", default, skip_serializing_if = "Option::is_none")]
    pub include_host: Option<bool>,
    #[serde(rename = "CaseIndependent", default, skip_serializing_if = "Option::is_none")]
    pub case_independent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    #[serde(rename = "IncludeQuery", default, skip_serializing_if = "Option::is_none")]
    pub include_query: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(rename = "SetFlagOnMatch", default, skip_serializing_if = "Option::is_none")]
    pub set_on_match: Option<i32>,
    #[serde(rename = "onlyonflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_flag: Option<i32>,
    #[serde(rename = "onlyonnoflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_no_flag: Option<i32>,
    #[serde(rename = "mustfail", default, skip_serializing_if = "Option::is_none")]
    pub must_fail: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddHeaderRule {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(rename = "HeaderValue", default, skip_serializing_if = "String::is_empty")]
    pub replacement: String,
    #[serde(rename = "onlyonflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_flag: Option<i32>,
    #[serde(rename = "onlyonnoflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_no_flag: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteHeaderRule {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(rename = "onlyonflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_flag: Option<i32>,
    #[serde(rename = "onlyonnoflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_no_flag: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceHeaderRule {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub replacement: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(rename = "onlyonflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_flag: Option<i32>,
    #[serde(rename = "onlyonnoflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_no_flag: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyUrlRule {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub replacement: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(rename = "onlyonflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_flag: Option<i32>,
    #[serde(rename = "onlyonnoflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_no_flag: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceBodyRule {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub replacement: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(rename = "onlyonflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_flag: Option<i32>,
    #[serde(rename = "onlyonnoflag", default, skip_serializing_if = "Option::is_none")]
    pub only_on_no_flag: Option<i32>,
    #[serde(rename = "caseindependent", default, skip_serializing_if = "Option::is_none")]
    pub case_independent: Option<bool>,
}

/// `showrule` / `addrule` / `modrule` response, one list per rule kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(rename = "AddHeaderRule", default, skip_serializing_if = "Vec::is_empty")]
    pub add_header_rules: Vec<AddHeaderRule>,
    #[serde(rename = "DeleteHeaderRule", default, skip_serializing_if = "Vec::is_empty")]
    pub delete_header_rules: Vec<DeleteHeaderRule>,
    #[serde(rename = "MatchContentRule", default, skip_serializing_if = "Vec::is_empty")]
    pub match_content_rules: Vec<MatchContentRule>,
    #[serde(rename = "ModifyURLRule", default, skip_serializing_if = "Vec::is_empty")]
    pub modify_url_rules: Vec<ModifyUrlRule>,
    #[serde(rename = "ReplaceBodyRule", default, skip_serializing_if = "Vec::is_empty")]
    pub replace_body_rules: Vec<ReplaceBodyRule>,
    #[serde(rename = "ReplaceHeaderRule", default, skip_serializing_if = "Vec::is_empty")]
    pub replace_header_rules: Vec<ReplaceHeaderRule>,
}

impl RuleResponse {
    /// Names of every rule in the response, regardless of kind
    pub fn names(&self) -> Vec<&str> {
        self.match_content_rules
            .iter()
            .map(|r| r.name.as_str())
            .chain(self.add_header_rules.iter().map(|r| r.name.as_str()))
            .chain(self.delete_header_rules.iter().map(|r| r.name.as_str()))
            .chain(self.replace_header_rules.iter().map(|r| r.name.as_str()))
            .chain(self.modify_url_rules.iter().map(|r| r.name.as_str()))
            .chain(self.replace_body_rules.iter().map(|r| r.name.as_str()))
            .collect()
    }

    /// Total number of rules in the response
    pub fn len(&self) -> usize {
        self.match_content_rules.len()
            + self.add_header_rules.len()
            + self.delete_header_rules.len()
            + self.replace_header_rules.len()
            + self.modify_url_rules.len()
            + self.replace_body_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl_api_response!(RuleResponse);
