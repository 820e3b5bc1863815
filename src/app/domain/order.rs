use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// File label shown while no proof of payment is attached.
pub const NO_FILE_LABEL: &str = "Chưa chọn file";
/// `paymentProof` value sent when no file is attached.
pub const NO_FILE_SENTINEL: &str = "Không có file";
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// Proof-of-payment attachment. Only the name leaves the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofFile {
    pub path: PathBuf,
    pub display_name: String,
}

impl ProofFile {
    pub fn from_path(path: PathBuf) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, display_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub proof: Option<ProofFile>,
}

impl OrderForm {
    /// All text fields non-blank and a proof file attached.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.address.trim().is_empty()
            && self.proof.is_some()
    }

    pub fn proof_label(&self) -> &str {
        self.proof
            .as_ref()
            .map(|p| p.display_name.as_str())
            .unwrap_or(NO_FILE_LABEL)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub text: String,
    pub color: String,
    pub font: String,
}

/// JSON body posted to the order intake endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub order_id: String,
    pub customer: Customer,
    pub product: Product,
    pub payment_proof: String,
}

impl OrderPayload {
    pub fn new(order_id: String, form: &OrderForm, product: Product) -> Self {
        Self {
            order_id,
            customer: Customer {
                name: form.name.clone(),
                phone: form.phone.clone(),
                address: form.address.clone(),
            },
            product,
            payment_proof: form
                .proof
                .as_ref()
                .map(|p| p.display_name.clone())
                .unwrap_or_else(|| NO_FILE_SENTINEL.to_string()),
        }
    }
}

/// `ORD-` followed by the current Unix time in milliseconds.
pub fn generate_order_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{}{}", ORDER_ID_PREFIX, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> OrderForm {
        OrderForm {
            name: "An".to_string(),
            phone: "0900000000".to_string(),
            address: "Hanoi".to_string(),
            proof: Some(ProofFile::from_path(PathBuf::from("/tmp/chuyen-khoan.png"))),
        }
    }

    #[test]
    fn test_validity_over_all_combinations() {
        for mask in 0u8..16 {
            let form = OrderForm {
                name: if mask & 1 != 0 { "An".into() } else { "  ".into() },
                phone: if mask & 2 != 0 { "0900000000".into() } else { String::new() },
                address: if mask & 4 != 0 { "Hanoi".into() } else { "\t".into() },
                proof: (mask & 8 != 0).then(|| ProofFile::from_path(PathBuf::from("proof.jpg"))),
            };
            assert_eq!(form.is_valid(), mask == 15, "mask {:04b}", mask);
        }
    }

    #[test]
    fn test_proof_label() {
        let mut form = filled_form();
        assert_eq!(form.proof_label(), "chuyen-khoan.png");
        form.proof = None;
        assert_eq!(form.proof_label(), NO_FILE_LABEL);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled_form();
        form.clear();
        assert_eq!(form, OrderForm::default());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_payload_json_shape() {
        let product = Product {
            text: "Lan".to_string(),
            color: "#333".to_string(),
            font: "Helvetica".to_string(),
        };
        let payload = OrderPayload::new("ORD-1".to_string(), &filled_form(), product);
        let value = serde_json::to_value(&payload).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["orderId", "customer", "product", "paymentProof"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(value["customer"]["phone"], "0900000000");
        assert_eq!(value["product"]["font"], "Helvetica");
        assert_eq!(value["paymentProof"], "chuyen-khoan.png");
    }

    #[test]
    fn test_payload_without_proof_uses_sentinel() {
        let mut form = filled_form();
        form.proof = None;
        let product = Product {
            text: String::new(),
            color: String::new(),
            font: String::new(),
        };
        let payload = OrderPayload::new("ORD-2".to_string(), &form, product);
        assert_eq!(payload.payment_proof, NO_FILE_SENTINEL);
    }

    #[test]
    fn test_order_id_format() {
        let id = generate_order_id();
        let digits = id.strip_prefix(ORDER_ID_PREFIX).unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
