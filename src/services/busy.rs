//! 请求占用标记
//!
//! 每个控件一个进行中标记，`BusyGuard` 在作用域结束时释放

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::services::view::{Control, View};

/// 各控件的进行中标记
#[derive(Debug, Default)]
pub struct ControlFlags {
    resume_upload: AtomicBool,
    jd_upload: AtomicBool,
    generate: AtomicBool,
    submit_answer: AtomicBool,
}

impl ControlFlags {
    fn flag(&self, control: Control) -> &AtomicBool {
        match control {
            Control::ResumeUpload => &self.resume_upload,
            Control::JdUpload => &self.jd_upload,
            Control::Generate => &self.generate,
            Control::SubmitAnswer => &self.submit_answer,
        }
    }

    pub fn is_busy(&self, control: Control) -> bool {
        self.flag(control).load(Ordering::Acquire)
    }
}

/// 控件占用守卫
///
/// 获取时标记控件进行中并通知视图；drop 时（成功、失败或 panic 展开）
/// 清除标记并恢复控件
pub struct BusyGuard<V: View> {
    control: Control,
    flags: Arc<ControlFlags>,
    view: Arc<V>,
}

impl<V: View> BusyGuard<V> {
    /// 占用控件，控件已被占用时返回 `AppError::Busy`
    pub fn acquire(control: Control, flags: &Arc<ControlFlags>, view: &Arc<V>) -> AppResult<Self> {
        if flags
            .flag(control)
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("控件 [{}] 已有进行中的请求", control);
            return Err(AppError::Busy { control });
        }

        debug!("控件 [{}] -> {}", control, control.busy_label());
        view.set_busy(control, true);

        Ok(Self {
            control,
            flags: Arc::clone(flags),
            view: Arc::clone(view),
        })
    }

    pub fn control(&self) -> Control {
        self.control
    }
}

impl<V: View> Drop for BusyGuard<V> {
    fn drop(&mut self) {
        self.flags.flag(self.control).store(false, Ordering::Release);
        self.view.set_busy(self.control, false);
        debug!("控件 [{}] 已恢复", self.control);
    }
}
