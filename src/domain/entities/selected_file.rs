//! # SelectedFile Value Object
//!
//! ユーザーが選択したアップロード対象ファイル

use std::path::{Path, PathBuf};

const PDF_MIME: &str = "application/pdf";
const FALLBACK_MIME: &str = "application/octet-stream";

/// ファイルの中身の取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// ディスク上のファイル（送信時に読み込む）
    Path(PathBuf),
    /// メモリ上のバイト列
    Memory(Vec<u8>),
}

/// 選択されたファイル
///
/// ファイル名と中身の取得元を保持する。中身の読み込みはアップロード時まで遅延される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    source: FileSource,
}

impl SelectedFile {
    /// パスから選択ファイルを作成します。
    ///
    /// ファイル名はパスの最後の要素から取得します。
    ///
    /// # 例
    ///
    /// ```
    /// use pdfsum::domain::entities::selected_file::SelectedFile;
    ///
    /// let file = SelectedFile::from_path("/tmp/reports/q3.pdf");
    /// assert_eq!(file.name(), "q3.pdf");
    /// assert_eq!(file.mime_type(), "application/pdf");
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            name,
            source: FileSource::Path(path.to_path_buf()),
        }
    }

    /// メモリ上のバイト列から選択ファイルを作成
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Memory(bytes),
        }
    }

    /// 名前が空の選択（空パスなど）は未選択として扱う
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// multipartパートに付与するMIMEタイプ
    pub fn mime_type(&self) -> &'static str {
        let is_pdf = Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf {
            PDF_MIME
        } else {
            FALLBACK_MIME
        }
    }
}
