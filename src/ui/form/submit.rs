use std::path::{Path, PathBuf};

use crate::api::ProductUploads;
use crate::models::MetalType;
use crate::ui::form::state::{FormField, FormKind};
use crate::validation::files::{check, select_photos};
use crate::validation::{
    FormError, PriceForm, ProductForm, ReferralForm, RefundForm, SchemeForm, UploadKind,
};
use crate::worker::Mutation;

/// A validated write plus problems that did not block it.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub mutation: Mutation,
    /// Skipped photo uploads, one message each.
    pub warnings: Vec<String>,
}

fn value(fields: &[FormField], index: usize) -> String {
    fields
        .get(index)
        .map(|field| field.value.clone())
        .unwrap_or_default()
}

/// Validates the form and builds the write it submits.
pub fn to_submission(kind: &FormKind, fields: &[FormField]) -> Result<Submission, FormError> {
    match kind {
        FormKind::ProductCreate | FormKind::ProductEdit { .. } => product_submission(kind, fields),
        _ => to_mutation(kind, fields).map(|mutation| Submission {
            mutation,
            warnings: Vec::new(),
        }),
    }
}

/// Like [`to_submission`], dropping warnings.
pub fn to_mutation(kind: &FormKind, fields: &[FormField]) -> Result<Mutation, FormError> {
    match kind {
        FormKind::ProductCreate | FormKind::ProductEdit { .. } => {
            product_submission(kind, fields).map(|submission| submission.mutation)
        }
        FormKind::Refund => {
            let form = RefundForm {
                order_id: value(fields, 0),
                amount: value(fields, 1),
                reason: value(fields, 2),
            };
            let (order_id, request) = form.validate()?;
            Ok(Mutation::InitiateRefund { order_id, request })
        }
        FormKind::PriceUpdate => {
            let metal_type = value(fields, 0).parse().unwrap_or(MetalType::Gold);
            let form = PriceForm {
                metal_type,
                buy_price: value(fields, 1),
                sell_price: value(fields, 2),
            };
            Ok(Mutation::UpdatePrice(form.validate()?))
        }
        FormKind::Referral(metal_type) => {
            let form = ReferralForm {
                metal_type: *metal_type,
                referrer_bonus: value(fields, 0),
                referee_bonus: value(fields, 1),
                min_investment: value(fields, 2),
            };
            Ok(Mutation::SetReferral(form.validate()?))
        }
        FormKind::SchemeCreate | FormKind::SchemeEdit { .. } => {
            let form = SchemeForm {
                name: value(fields, 0),
                description: value(fields, 1),
                terms_and_conditions: value(fields, 2),
                is_active: fields.get(3).map_or(true, FormField::is_on),
            };
            let draft = form.validate()?;
            Ok(match kind {
                FormKind::SchemeEdit { id } => Mutation::UpdateScheme {
                    id: id.clone(),
                    draft,
                },
                _ => Mutation::CreateScheme(draft),
            })
        }
    }
}

/// Invalid photos are skipped and reported; a bad certificate blocks the write.
fn product_submission(kind: &FormKind, fields: &[FormField]) -> Result<Submission, FormError> {
    let form = ProductForm {
        name: value(fields, 0),
        category: value(fields, 1),
        sku: value(fields, 2),
        metal_type: value(fields, 3).parse().unwrap_or(MetalType::Gold),
        purity: value(fields, 4),
        weight: value(fields, 5),
        stock: value(fields, 6),
        making_charge: value(fields, 7),
        wastage_percentage: value(fields, 8),
        gst: value(fields, 9),
        discount_percentage: value(fields, 10),
    };
    let draft = form.validate()?;

    let photo_paths: Vec<PathBuf> = value(fields, 11)
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect();
    let (photos, rejected) = select_photos(photo_paths.as_slice());
    let certificate_path = value(fields, 12);
    let certificate = match certificate_path.trim() {
        "" => None,
        path => Some(check(UploadKind::Certificate, Path::new(path))?),
    };
    let uploads = ProductUploads {
        photos,
        certificate,
    };

    let mutation = match kind {
        FormKind::ProductEdit { id } => Mutation::UpdateProduct {
            id: id.clone(),
            draft,
            uploads,
        },
        _ => Mutation::CreateProduct { draft, uploads },
    };
    Ok(Submission {
        mutation,
        warnings: rejected.iter().map(ToString::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: &FormKind, values: &[&str]) -> Vec<FormField> {
        let mut fields = kind.blank_fields();
        for (field, value) in fields.iter_mut().zip(values) {
            field.value = (*value).to_string();
        }
        fields
    }

    #[test]
    fn refund_form_builds_refund() {
        let fields = filled(&FormKind::Refund, &["ORD123", "500", "damaged"]);
        let mutation = to_mutation(&FormKind::Refund, &fields).unwrap();
        match mutation {
            Mutation::InitiateRefund { order_id, request } => {
                assert_eq!(order_id, "ORD123");
                assert_eq!(request.amount, 500.0);
                assert_eq!(request.reason, "damaged");
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }

    #[test]
    fn price_form_reads_metal_choice() {
        let kind = FormKind::PriceUpdate;
        let fields = filled(&kind, &["silver", "90", "88"]);
        match to_mutation(&kind, &fields).unwrap() {
            Mutation::UpdatePrice(update) => assert_eq!(update.metal_type, MetalType::Silver),
            other => panic!("unexpected mutation {other:?}"),
        }
    }

    #[test]
    fn scheme_edit_keeps_id() {
        let kind = FormKind::SchemeEdit {
            id: "s-1".to_string(),
        };
        let fields = filled(&kind, &["Gold SIP", "", "", "false"]);
        match to_mutation(&kind, &fields).unwrap() {
            Mutation::UpdateScheme { id, draft } => {
                assert_eq!(id, "s-1");
                assert_eq!(draft.is_active, Some(false));
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }

    #[test]
    fn empty_scheme_name_is_rejected() {
        let fields = FormKind::SchemeCreate.blank_fields();
        assert_eq!(
            to_mutation(&FormKind::SchemeCreate, &fields),
            Err(FormError::SchemeNameRequired)
        );
    }

    #[test]
    fn product_form_skips_bad_photos_and_keeps_certificate() {
        let dir = tempfile::TempDir::new().unwrap();
        let photo = dir.path().join("coin.png");
        std::fs::write(&photo, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, b"not an image").unwrap();
        let certificate = dir.path().join("hallmark.pdf");
        std::fs::write(&certificate, b"%PDF-1.4\n").unwrap();

        let kind = FormKind::ProductCreate;
        let mut fields = kind.blank_fields();
        fields[0].value = "Lakshmi Coin".to_string();
        fields[1].value = "coins".to_string();
        fields[5].value = "10".to_string();
        fields[11].value = format!("{}, {}", photo.display(), notes.display());
        fields[12].value = certificate.display().to_string();

        let submission = to_submission(&kind, &fields).unwrap();
        assert_eq!(submission.warnings.len(), 1);
        assert!(submission.warnings[0].contains("notes.txt"));
        match submission.mutation {
            Mutation::CreateProduct { draft, uploads } => {
                assert_eq!(draft.name, "Lakshmi Coin");
                assert_eq!(draft.purity.as_deref(), Some("999"));
                assert_eq!(uploads.photos.len(), 1);
                assert_eq!(uploads.photos[0].mime, "image/png");
                assert_eq!(
                    uploads.certificate.map(|c| c.mime),
                    Some("application/pdf".to_string())
                );
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }

    #[test]
    fn product_edit_rejects_unusable_certificate() {
        let dir = tempfile::TempDir::new().unwrap();
        let certificate = dir.path().join("hallmark.txt");
        std::fs::write(&certificate, b"plain text").unwrap();

        let kind = FormKind::ProductEdit {
            id: "p1".to_string(),
        };
        let mut fields = kind.blank_fields();
        fields[0].value = "Bangle".to_string();
        fields[1].value = "ornaments".to_string();
        fields[12].value = certificate.display().to_string();

        assert!(matches!(
            to_mutation(&kind, &fields),
            Err(FormError::File(_))
        ));

        fields[12].value.clear();
        match to_mutation(&kind, &fields).unwrap() {
            Mutation::UpdateProduct { id, uploads, .. } => {
                assert_eq!(id, "p1");
                assert_eq!(uploads, ProductUploads::default());
            }
            other => panic!("unexpected mutation {other:?}"),
        }
    }
}
