use super::client::{ApiClient, ApiError};
use crate::models::{MeterUnit, UploadResponse};

impl ApiClient {
    /// Upload a smart-meter file (CSV or Excel) for backend processing.
    /// The unit hint tells the backend how the `total` column is scaled.
    pub async fn upload_smart_meter(
        &self,
        file: &web_sys::File,
        unit: MeterUnit,
    ) -> Result<UploadResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("Kon uploadformulier niet aanmaken".to_string()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Network("Kon bestand niet toevoegen".to_string()))?;
        form.append_with_str("unit", unit.as_str())
            .map_err(|_| ApiError::Network("Kon eenheid niet toevoegen".to_string()))?;

        self.post_form("/api/upload-smart-meter", form).await
    }
}
