//! Shapes of the JSON documents hidden inside WeChat `encryptedData`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Watermark;

/// Which payload shape the caller expects
///
/// WeChat gives no type tag inside the plaintext, so the shape is always
/// chosen by the calling code from the client API that produced the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// Result of `getPhoneNumber`
    Mobile,
    /// Result of `getShareInfo`
    ShareInfo,
    /// Result of `getUserInfo`
    UserInfo,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Mobile => "mobile",
            PayloadKind::ShareInfo => "share_info",
            PayloadKind::UserInfo => "user_info",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decrypted phone number
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mobile {
    /// Phone number with country code for non-mainland numbers
    pub phone_number: String,
    /// Phone number without country code
    pub pure_phone_number: String,
    /// Country code (e.g., 86)
    pub country_code: String,
    pub watermark: Watermark,
}

impl Mobile {
    pub fn new(
        phone_number: impl Into<String>,
        pure_phone_number: impl Into<String>,
        country_code: impl Into<String>,
        watermark: Watermark,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            pure_phone_number: pure_phone_number.into(),
            country_code: country_code.into(),
            watermark,
        }
    }

    pub fn watermark(&self) -> &Watermark {
        &self.watermark
    }
}

/// Decrypted share ticket information
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShareInfo {
    /// Group identifier, unique per Mini Program
    #[serde(rename = "openGId")]
    pub open_gid: String,
}

impl ShareInfo {
    pub fn new(open_gid: impl Into<String>) -> Self {
        Self {
            open_gid: open_gid.into(),
        }
    }
}

/// Gender as reported by `getUserInfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Unknown,
    Male,
    Female,
}

/// Decrypted full user profile
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub open_id: String,
    pub nick_name: String,
    /// 0=unknown, 1=male, 2=female
    pub gender: u8,
    pub province: String,
    pub language: String,
    pub country: String,
    pub city: String,
    pub avatar_url: String,
    /// Only present when the Mini Program is bound to an open platform account
    #[serde(default)]
    pub union_id: Option<String>,
    pub watermark: Watermark,
}

impl UserInfo {
    pub fn gender(&self) -> Gender {
        match self.gender {
            1 => Gender::Male,
            2 => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    pub fn watermark(&self) -> &Watermark {
        &self.watermark
    }
}

/// One decrypted payload of a caller-selected shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptedPayload {
    Mobile(Mobile),
    ShareInfo(ShareInfo),
    UserInfo(UserInfo),
}

impl DecryptedPayload {
    /// Parse unpadded plaintext as the requested shape
    ///
    /// Unknown fields are ignored; missing required fields are an error.
    pub fn parse(kind: PayloadKind, plaintext: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            PayloadKind::Mobile => DecryptedPayload::Mobile(serde_json::from_slice(plaintext)?),
            PayloadKind::ShareInfo => {
                DecryptedPayload::ShareInfo(serde_json::from_slice(plaintext)?)
            }
            PayloadKind::UserInfo => {
                DecryptedPayload::UserInfo(serde_json::from_slice(plaintext)?)
            }
        })
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            DecryptedPayload::Mobile(_) => PayloadKind::Mobile,
            DecryptedPayload::ShareInfo(_) => PayloadKind::ShareInfo,
            DecryptedPayload::UserInfo(_) => PayloadKind::UserInfo,
        }
    }

    /// Share info payloads carry no watermark
    pub fn watermark(&self) -> Option<&Watermark> {
        match self {
            DecryptedPayload::Mobile(mobile) => Some(&mobile.watermark),
            DecryptedPayload::ShareInfo(_) => None,
            DecryptedPayload::UserInfo(info) => Some(&info.watermark),
        }
    }

    pub fn into_mobile(self) -> Option<Mobile> {
        match self {
            DecryptedPayload::Mobile(mobile) => Some(mobile),
            _ => None,
        }
    }

    pub fn into_share_info(self) -> Option<ShareInfo> {
        match self {
            DecryptedPayload::ShareInfo(info) => Some(info),
            _ => None,
        }
    }

    pub fn into_user_info(self) -> Option<UserInfo> {
        match self {
            DecryptedPayload::UserInfo(info) => Some(info),
            _ => None,
        }
    }
}
