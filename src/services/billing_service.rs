// src/services/billing_service.rs

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal, RoundingStrategy,
};
use sqlx::PgPool;

use crate::{
    common::{error::AppError, period::Period},
    db::{InvoiceRepository, MeterRepository, RoomRepository, SettingsRepository, TariffRepository, TenantRepository},
    models::{
        invoice::{InvoiceFigures, InvoiceView, RecalculatedInvoice},
        meter::MeterReading,
        tariff::Tariff,
    },
};

// ---
// Cálculo puro (não toca no banco)
// ---

// Consumo = fim - início, arredondado para 2 casas
fn usage(start: f64, end: f64, field: &'static str) -> Result<Decimal, AppError> {
    let diff = Decimal::from_f64(end - start).ok_or(AppError::InvalidNumber(field))?;
    Ok(diff.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

// Consumo × preço unitário, arredondado para a moeda inteira (sem centavos)
fn charge(usage: Decimal, unit_price: i32) -> Result<i32, AppError> {
    (usage * Decimal::from(unit_price))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .ok_or_else(|| anyhow::anyhow!("subtotal fora do intervalo de i32").into())
}

/// Aplica a tabela de preços a uma leitura:
/// `total = aluguel + internet + limpeza + round(consumo_luz × preço) + round(consumo_água × preço)`.
pub fn compute_invoice(tariff: &Tariff, reading: &MeterReading) -> Result<InvoiceFigures, AppError> {
    let elec_usage = usage(reading.elec_start, reading.elec_end, "elec_end")?;
    let water_usage = usage(reading.water_start, reading.water_end, "water_end")?;

    let subtotal_electricity = charge(elec_usage, tariff.electricity_price)?;
    let subtotal_water = charge(water_usage, tariff.water_price)?;

    let total = [
        tariff.rent,
        tariff.internet_fee,
        tariff.cleaning_fee,
        subtotal_electricity,
        subtotal_water,
    ]
    .iter()
    .map(|v| i64::from(*v))
    .sum::<i64>();

    let total = i32::try_from(total)
        .map_err(|_| anyhow::anyhow!("total da fatura fora do intervalo de i32: {}", total))?;

    Ok(InvoiceFigures {
        elec_usage,
        water_usage,
        subtotal_electricity,
        subtotal_water,
        rent: tariff.rent,
        internet_fee: tariff.internet_fee,
        cleaning_fee: tariff.cleaning_fee,
        total,
    })
}

#[derive(Clone)]
pub struct BillingService {
    room_repo: RoomRepository,
    tenant_repo: TenantRepository,
    tariff_repo: TariffRepository,
    meter_repo: MeterRepository,
    invoice_repo: InvoiceRepository,
    settings_repo: SettingsRepository,
    pool: PgPool,
}

impl BillingService {
    pub fn new(
        room_repo: RoomRepository,
        tenant_repo: TenantRepository,
        tariff_repo: TariffRepository,
        meter_repo: MeterRepository,
        invoice_repo: InvoiceRepository,
        settings_repo: SettingsRepository,
        pool: PgPool,
    ) -> Self {
        Self { room_repo, tenant_repo, tariff_repo, meter_repo, invoice_repo, settings_repo, pool }
    }

    /// Recalcula e grava (UPSERT) a fatura do quarto no período.
    ///
    /// Retorna `Ok(None)` quando falta a tabela de preços ou a leitura do mês:
    /// a fatura "ainda não é calculável" e nada é gravado.
    pub async fn recalculate(
        &self,
        room_id: i32,
        period: Period,
    ) -> Result<Option<RecalculatedInvoice>, AppError> {
        let tariff = self.tariff_repo.find_by_room(room_id).await?;
        let reading = self.meter_repo.find(room_id, period).await?;

        let (tariff, reading) = match (tariff, reading) {
            (Some(t), Some(r)) => (t, r),
            _ => {
                tracing::debug!(room_id, %period, "Fatura ainda não calculável (faltam dados)");
                return Ok(None);
            }
        };

        let figures = compute_invoice(&tariff, &reading)?;

        let invoice = self.invoice_repo
            .upsert(&self.pool, room_id, period, &figures)
            .await?;

        tracing::info!(room_id, %period, total = invoice.total, "Fatura recalculada");

        Ok(Some(RecalculatedInvoice { invoice, figures, tariff }))
    }

    /// Monta a página da fatura. Abrir a fatura SEMPRE recalcula e sobrescreve.
    pub async fn invoice_view(&self, room_id: i32, period: Period) -> Result<InvoiceView, AppError> {
        let room = self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or(AppError::RoomNotFound)?;

        let tenant = self.tenant_repo.find_active(room_id).await?;

        let recalculated = self.recalculate(room_id, period)
            .await?
            .ok_or(AppError::InsufficientData)?;

        let settings = self.settings_repo.get_settings().await?;

        Ok(InvoiceView {
            room,
            tenant,
            settings,
            yyyymm: period.to_string(),
            recalculated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tariff(rent: i32, internet: i32, cleaning: i32, elec: i32, water: i32) -> Tariff {
        Tariff {
            id: 1,
            room_id: 1,
            rent,
            internet_fee: internet,
            cleaning_fee: cleaning,
            electricity_price: elec,
            water_price: water,
        }
    }

    fn reading(elec: (f64, f64), water: (f64, f64)) -> MeterReading {
        MeterReading {
            id: 1,
            room_id: 1,
            yyyymm: "202403".into(),
            elec_start: elec.0,
            elec_end: elec.1,
            water_start: water.0,
            water_end: water.1,
        }
    }

    #[test]
    fn p201_scenario_totals_4_020_000() {
        let t = tariff(3_500_000, 20_000, 100_000, 4_500, 35_000);
        let r = reading((100.0, 150.0), (10.0, 15.0));

        let f = compute_invoice(&t, &r).unwrap();

        assert_eq!(f.elec_usage, Decimal::from(50));
        assert_eq!(f.water_usage, Decimal::from(5));
        assert_eq!(f.subtotal_electricity, 225_000);
        assert_eq!(f.subtotal_water, 175_000);
        assert_eq!(f.rent, 3_500_000);
        assert_eq!(f.internet_fee, 20_000);
        assert_eq!(f.cleaning_fee, 100_000);
        assert_eq!(f.total, 4_020_000);
    }

    #[test]
    fn fractional_usage_is_rounded_to_two_places() {
        let t = tariff(0, 0, 0, 4_500, 35_000);
        // 100.3 - 100.1 em f64 dá 0.19999999999998863
        let r = reading((100.1, 100.3), (0.0, 0.0));

        let f = compute_invoice(&t, &r).unwrap();

        assert_eq!(f.elec_usage, Decimal::new(20, 2));
        assert_eq!(f.subtotal_electricity, 900);
        assert_eq!(f.total, 900);
    }

    #[test]
    fn subtotals_round_half_up_to_whole_currency() {
        let t = tariff(0, 0, 0, 3, 1);
        let r = reading((0.0, 0.5), (0.0, 0.0));

        let f = compute_invoice(&t, &r).unwrap();

        // 0.5 × 3 = 1.5 → 2
        assert_eq!(f.subtotal_electricity, 2);
    }

    #[test]
    fn zero_usage_charges_only_flat_fees() {
        let t = tariff(3_200_000, 60_000, 100_000, 4_500, 35_000);
        let r = reading((500.0, 500.0), (42.0, 42.0));

        let f = compute_invoice(&t, &r).unwrap();

        assert_eq!(f.subtotal_electricity, 0);
        assert_eq!(f.subtotal_water, 0);
        assert_eq!(f.total, 3_360_000);
    }

    #[test]
    fn total_matches_formula_across_inputs() {
        let t = tariff(3_200_000, 40_000, 100_000, 4_500, 35_000);

        for (es, ee, ws, we) in [
            (0.0, 0.0, 0.0, 0.0),
            (1200.0, 1337.0, 80.0, 92.0),
            (12.25, 99.75, 3.5, 7.25),
            (0.0, 10_000.0, 0.0, 500.0),
        ] {
            let f = compute_invoice(&t, &reading((es, ee), (ws, we))).unwrap();

            let elec = ((ee - es) * 4_500.0_f64).round() as i64;
            let water = ((we - ws) * 35_000.0_f64).round() as i64;
            let expected = 3_200_000 + 40_000 + 100_000 + elec + water;

            assert_eq!(i64::from(f.total), expected, "leitura {es}->{ee}, {ws}->{we}");
        }
    }

    #[test]
    fn recomputing_unchanged_inputs_is_idempotent() {
        let t = tariff(3_500_000, 20_000, 100_000, 4_500, 35_000);
        let r = reading((100.0, 150.0), (10.0, 15.0));

        assert_eq!(compute_invoice(&t, &r).unwrap(), compute_invoice(&t, &r).unwrap());
    }

    #[test]
    fn tariff_change_changes_the_projection() {
        let r = reading((100.0, 150.0), (10.0, 15.0));
        let before = compute_invoice(&tariff(3_500_000, 20_000, 100_000, 4_500, 35_000), &r).unwrap();
        let after = compute_invoice(&tariff(3_500_000, 20_000, 100_000, 5_000, 35_000), &r).unwrap();

        assert_eq!(after.total - before.total, 25_000);
    }

    #[test]
    fn absurd_totals_are_rejected_instead_of_wrapping() {
        let t = tariff(i32::MAX, i32::MAX, 0, 0, 0);
        let r = reading((0.0, 0.0), (0.0, 0.0));

        assert!(matches!(compute_invoice(&t, &r), Err(AppError::InternalServerError(_))));
    }
}
