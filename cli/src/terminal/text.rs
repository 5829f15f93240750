//! Localized strings of the terminal front end.

use perfpredict_common::bounds::Field;
use perfpredict_common::locale::Locale;
use perfpredict_common::model::Sex;

pub struct Catalog {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_header: &'static str,
    pub results_header: &'static str,
    pub sex: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub heart_rate: &'static str,
    pub respiratory_rate: &'static str,
    pub vo2max: &'static str,
    pub vo2max_male: &'static str,
    pub vo2max_female: &'static str,
    pub bpm: &'static str,
    pub breaths_per_min: &'static str,
    pub ml_per_min: &'static str,
    pub zone_in: &'static str,
    pub zone_out: &'static str,
    pub footnote: &'static str,
    fields: [&'static str; 5],
}

pub const EN: Catalog = Catalog {
    title: "Personalized Athlete Performance Predictor",
    subtitle: "Enter your body parameters and ambient conditions to predict \
               your performance under high-intensity exercise.",
    input_header: "your parameters",
    results_header: "prediction results",
    sex: "Sex",
    male: "male",
    female: "female",
    heart_rate: "Predicted max heart rate (HR)",
    respiratory_rate: "Predicted respiratory rate (RR)",
    vo2max: "Predicted VO2max",
    vo2max_male: "VO2max · male",
    vo2max_female: "VO2max · female",
    bpm: "bpm",
    breaths_per_min: "breaths/min",
    ml_per_min: "mL/min",
    zone_in: "Anaerobic zone reached! Keep your intensity under control.",
    zone_out: "Not in the anaerobic zone yet.",
    footnote: "Ridge regression fitted on high-intensity sessions of the \
               PhysioNet Treadmill Dataset.",
    fields: [
        "Age (years)",
        "Weight (kg)",
        "Height (cm)",
        "Temperature (°C)",
        "Humidity (%)",
    ],
};

pub const ZH: Catalog = Catalog {
    title: "个性化运动表现预测",
    subtitle: "输入你的身体参数和环境条件，预测你在高强度运动下的表现",
    input_header: "输入参数",
    results_header: "预测结果",
    sex: "性别",
    male: "男",
    female: "女",
    heart_rate: "预测最大心率（HR）",
    respiratory_rate: "预测呼吸频率（RR）",
    vo2max: "预测最大摄氧量（VO2max）",
    vo2max_male: "最大摄氧量 · 男",
    vo2max_female: "最大摄氧量 · 女",
    bpm: "bpm",
    breaths_per_min: "次/分钟",
    ml_per_min: "mL/min",
    zone_in: "已进入无氧区间！请注意强度控制",
    zone_out: "尚未进入无氧区间",
    footnote: "模型基于 Ridge Regression，数据源自 PhysioNet Treadmill Dataset \
               中高强度训练下的表现回归模型。",
    fields: [
        "年龄 (岁)",
        "体重 (kg)",
        "身高 (cm)",
        "环境温度 (℃)",
        "环境湿度 (%)",
    ],
};

pub fn catalog(locale: Locale) -> &'static Catalog {
    match locale {
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}

impl Catalog {
    pub fn field(&self, field: Field) -> &'static str {
        match field {
            Field::Age => self.fields[0],
            Field::Weight => self.fields[1],
            Field::Height => self.fields[2],
            Field::Temperature => self.fields[3],
            Field::Humidity => self.fields[4],
        }
    }

    pub fn sex_value(&self, sex: Sex) -> &'static str {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}
